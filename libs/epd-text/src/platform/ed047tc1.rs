pub const WIDTH: u32 = 960;
pub const LINES: u32 = 540;
