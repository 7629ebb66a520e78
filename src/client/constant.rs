pub const SITE_NAME: &str = "Staffboard";

pub const DEFAULT_LOA_DAYS: u32 = 7;
pub const MAX_LOA_DAYS: u32 = 60;

pub const MAX_WARN_LEVEL: u8 = 3;
pub const MAX_APPEAL_LENGTH: usize = 2000;
