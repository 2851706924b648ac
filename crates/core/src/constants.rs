/// Lowest valid day-of-month for due/receipt days.
pub const DIA_MIN: u32 = 1;

/// Highest valid day-of-month for due/receipt days.
pub const DIA_MAX: u32 = 31;
