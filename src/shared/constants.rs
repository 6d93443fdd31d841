/// Number of questions per page on paginated listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category id meaning "questions from every category"
pub const ALL_CATEGORIES_ID: i32 = 0;

/// Accepted difficulty range for questions
pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;
