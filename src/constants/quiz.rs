pub const QUESTION_COUNT_CHOICES: [usize; 4] = [5, 10, 15, 20];
pub const DEFAULT_QUESTION_COUNT: usize = 10;

pub const SESSION_HEADER: &str = "x-session-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";
