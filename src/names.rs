pub const HOME_URL: &str = "/";
pub const GENERATE_URL: &str = "/generate";
pub const QUIZ_URL: &str = "/quiz";
pub const FEEDBACK_URL: &str = "/feedback";

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

// Quiz generation defaults
pub const MIN_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 20;
pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const OPTIONS_PER_QUESTION: usize = 4;

// Completion API defaults
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_SESSION_TTL_MINUTES: u64 = 120;
