//! Demo data the studio starts with.

use crate::models::{Appointment, AppointmentStatus, Client, LastVisit, PortfolioPiece};

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".into(),
            client_name: "Alex Johnson".into(),
            date: "2024-01-15".into(),
            time: "14:00".into(),
            service: "Large Sleeve Tattoo".into(),
            status: AppointmentStatus::Scheduled,
            price: 800.0,
            notes: "Dragon design on left arm".into(),
        },
        Appointment {
            id: "2".into(),
            client_name: "Sarah Williams".into(),
            date: "2024-01-16".into(),
            time: "10:00".into(),
            service: "Small Wrist Tattoo".into(),
            status: AppointmentStatus::Completed,
            price: 150.0,
            notes: "Minimalist rose design".into(),
        },
    ]
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "1".into(),
            name: "Alex Johnson".into(),
            email: "alex@email.com".into(),
            phone: "(555) 123-4567".into(),
            total_sessions: 3,
            total_spent: 1200.0,
            last_visit: LastVisit::On("2024-01-10".into()),
        },
        Client {
            id: "2".into(),
            name: "Sarah Williams".into(),
            email: "sarah@email.com".into(),
            phone: "(555) 987-6543".into(),
            total_sessions: 1,
            total_spent: 150.0,
            last_visit: LastVisit::On("2024-01-05".into()),
        },
    ]
}

pub fn portfolio() -> Vec<PortfolioPiece> {
    vec![
        PortfolioPiece {
            id: "1".into(),
            title: "Dragon Sleeve".into(),
            style: "Traditional Japanese".into(),
            size: "Large".into(),
            description: "Full arm dragon with cherry blossoms".into(),
            image_url: "https://images.unsplash.com/photo-1611501275019-9b5cda994e8d?w=400".into(),
        },
        PortfolioPiece {
            id: "2".into(),
            title: "Rose Minimalist".into(),
            style: "Minimalist".into(),
            size: "Small".into(),
            description: "Simple black line rose design".into(),
            image_url: "https://images.unsplash.com/photo-1565058379802-bbe93b2f703a?w=400".into(),
        },
        PortfolioPiece {
            id: "3".into(),
            title: "Geometric Wolf".into(),
            style: "Geometric".into(),
            size: "Medium".into(),
            description: "Abstract geometric wolf head".into(),
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        },
    ]
}
