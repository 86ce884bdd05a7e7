pub const WIDTH: u32 = 800;
pub const LINES: u32 = 600;
