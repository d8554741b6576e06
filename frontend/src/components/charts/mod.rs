pub mod category_chart;
pub mod monthly_chart;
pub mod trends_chart;

use plotters::style::RGBColor;

pub use category_chart::CategoryChart;
pub use monthly_chart::MonthlyChart;
pub use trends_chart::TrendsChart;

/// Series colours shared by all charts.
pub const INCOME_COLOR: RGBColor = RGBColor(0x2E, 0xCC, 0x71);
pub const EXPENSE_COLOR: RGBColor = RGBColor(0xE7, 0x4C, 0x3C);
pub const AXIS_COLOR: RGBColor = RGBColor(230, 230, 230);
pub const LABEL_COLOR: RGBColor = RGBColor(0x2C, 0x3E, 0x50);

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 350;
