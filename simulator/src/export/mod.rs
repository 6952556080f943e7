pub mod report;
pub mod svg;

pub use report::write_report;
pub use svg::write_svg;
