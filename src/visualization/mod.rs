mod tables;

pub use tables::{
    format_comparison_table, format_crop_table, format_schedule_table,
    format_simulation_summary, format_soil_table, format_strategy_table, format_week_detail,
    print_comparison_table, print_crop_table, print_schedule_table, print_simulation_summary,
    print_soil_table, print_strategy_table, print_week_detail,
};
