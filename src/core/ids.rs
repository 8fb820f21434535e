/// Issues record ids from creation timestamps.
///
/// Ids are the creation time in milliseconds. Two records created within the
/// same millisecond get consecutive values, so issued ids never repeat.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, now_millis: i64) -> String {
        let value = now_millis.max(self.last + 1);
        self.last = value;
        value.to_string()
    }
}
