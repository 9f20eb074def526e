pub mod formatter;

pub use formatter::{
    format_assignment_detail, format_assignment_list, format_breakdown, format_category_detail,
    format_category_list, format_course_info, format_percent, format_score, should_use_colors,
};
