//! Central place for all default values.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {
    /* Loader */
    pub const TOPICS_ENDPOINT: &'static str = "http://127.0.0.1:3000/topics";

    /* Logging */
    pub const LOG_DIR: &'static str = "./logs";
    pub const LOG_FILE_PREFIX: &'static str = "study-quiz.log";
    pub const LOG_FILTER: &'static str = "study_quiz=info,warn";

    /* Quiz feedback */
    pub const CORRECT_FEEDBACK: &'static str = "Correct!";
    pub const INCORRECT_PREFIX: &'static str = "Incorrect!";

    /* UI loop */
    pub const POLL_INTERVAL_MS: u64 = 100;
}
