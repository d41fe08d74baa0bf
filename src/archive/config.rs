pub mod site {
    pub const US_BASE: &str = "https://leetcode.com/";
    pub const CN_BASE: &str = "https://leetcode-cn.com/";
}
pub mod session {
    pub const FIREFOX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
    pub const VERBOSE: bool = false;
    pub const SESSION_COOKIE: &str = "LEETCODE_SESSION";
    pub const CSRF_COOKIE: &str = "csrftoken";
}
pub mod submission {
    pub const PAGE_SIZE: usize = 20;
}
pub mod layout {
    pub const DIFFICULTY_FOLDERS: [&str; 3] = ["easy", "medium", "hard"];
    pub const SOLVED_FOLDER: &str = "solved";
}
pub mod language {
    pub const DEFAULT_LANGUAGE: &str = "javascript";
}
