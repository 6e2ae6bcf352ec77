use crate::field_type::FieldType;

pub(crate) static PROPERTY_FIELDS: &[(&str, FieldType)] = &[
    ("activity_id_increment", FieldType::Integer),
    ("activity_id_increment_based_on_selected_activity", FieldType::Boolean),
    ("activity_id_prefix", FieldType::String),
    ("activity_id_suffix", FieldType::Integer),
    ("actual_cost", FieldType::Currency),
    ("actual_duration", FieldType::Duration),
    ("actual_finish", FieldType::Date),
    ("actual_start", FieldType::Date),
    ("actual_work", FieldType::Work),
    ("actuals_in_sync", FieldType::Boolean),
    ("admin_project", FieldType::Boolean),
    ("am_text", FieldType::String),
    ("application_version", FieldType::Integer),
    ("author", FieldType::String),
    ("auto_add_new_resources_and_tasks", FieldType::Boolean),
    ("auto_link", FieldType::Boolean),
    ("autofilter", FieldType::Boolean),
    ("bar_text_date_format", FieldType::ProjectDateFormat),
    ("baseline10_date", FieldType::Date),
    ("baseline1_date", FieldType::Date),
    ("baseline2_date", FieldType::Date),
    ("baseline3_date", FieldType::Date),
    ("baseline4_date", FieldType::Date),
    ("baseline5_date", FieldType::Date),
    ("baseline6_date", FieldType::Date),
    ("baseline7_date", FieldType::Date),
    ("baseline8_date", FieldType::Date),
    ("baseline9_date", FieldType::Date),
    ("baseline_calendar_name", FieldType::String),
    ("baseline_cost", FieldType::Currency),
    ("baseline_date", FieldType::Date),
    ("baseline_duration", FieldType::Duration),
    ("baseline_finish", FieldType::Date),
    ("baseline_for_earned_value", FieldType::Integer),
    ("baseline_project_unique_id", FieldType::Integer),
    ("baseline_start", FieldType::Date),
    ("baseline_type_name", FieldType::String),
    ("baseline_type_unique_id", FieldType::Integer),
    ("baseline_work", FieldType::Work),
    ("calculate_float_based_on_finish_date_of_each_project", FieldType::Boolean),
    ("calculate_multiple_float_paths", FieldType::Boolean),
    ("calculate_multiple_float_paths_using_total_float", FieldType::Boolean),
    ("category", FieldType::String),
    ("comments", FieldType::String),
    ("company", FieldType::String),
    ("compute_start_to_start_lag_from_early_start", FieldType::Boolean),
    ("consider_assignments_in_other_projects", FieldType::Boolean),
    ("consider_assignments_in_other_projects_with_priority_equal_higher_than", FieldType::Integer),
    ("content_status", FieldType::String),
    ("content_type", FieldType::String),
    ("cost", FieldType::Currency),
    ("creation_date", FieldType::Date),
    ("critical_activity_type", FieldType::CriticalActivityType),
    ("critical_slack_limit", FieldType::Duration),
    ("currency_code", FieldType::String),
    ("currency_digits", FieldType::Integer),
    ("currency_symbol", FieldType::String),
    ("currency_symbol_position", FieldType::CurrencySymbolPosition),
    ("current_date", FieldType::Date),
    ("custom_properties", FieldType::Map),
    ("data_date_and_planned_start_set_to_project_forecast_start", FieldType::Boolean),
    ("date_format", FieldType::ProjectDateFormat),
    ("date_order", FieldType::DateOrder),
    ("date_separator", FieldType::Char),
    ("days_per_month", FieldType::Integer),
    ("decimal_separator", FieldType::Char),
    ("default_calendar_unique_id", FieldType::Integer),
    ("default_duration_is_fixed", FieldType::Boolean),
    ("default_duration_units", FieldType::TimeUnits),
    ("default_end_time", FieldType::Time),
    ("default_fixed_cost_accrual", FieldType::Accrue),
    ("default_overtime_rate", FieldType::Rate),
    ("default_standard_rate", FieldType::Rate),
    ("default_start_time", FieldType::Time),
    ("default_task_earned_value_method", FieldType::EarnedValueMethod),
    ("default_task_type", FieldType::TaskType),
    ("default_work_units", FieldType::TimeUnits),
    ("display_multiple_float_paths_ending_with_activity_unique_id", FieldType::Integer),
    ("document_version", FieldType::String),
    ("duration", FieldType::Duration),
    ("earned_value_method", FieldType::EarnedValueMethod),
    ("editable_actual_costs", FieldType::Boolean),
    ("editing_time", FieldType::Integer),
    ("enable_publication", FieldType::Boolean),
    ("enable_summarization", FieldType::Boolean),
    ("export_flag", FieldType::Boolean),
    ("extended_creation_date", FieldType::Date),
    ("file_application", FieldType::String),
    ("file_type", FieldType::String),
    ("finish_date", FieldType::Date),
    ("finish_variance", FieldType::Duration),
    ("fiscal_year_start", FieldType::Boolean),
    ("fiscal_year_start_month", FieldType::Integer),
    ("full_application_name", FieldType::String),
    ("guid", FieldType::Guid),
    ("honor_constraints", FieldType::Boolean),
    ("hyperlink_base", FieldType::String),
    ("ignore_relationships_to_and_from_other_projects", FieldType::Boolean),
    ("inserted_projects_like_summary", FieldType::Boolean),
    ("keywords", FieldType::String),
    ("language", FieldType::String),
    ("last_author", FieldType::String),
    ("last_baseline_update_date", FieldType::Date),
    ("last_saved", FieldType::Date),
    ("lastprinted", FieldType::Date),
    ("level_all_resources", FieldType::Boolean),
    ("level_resources_only_within_activity_total_float", FieldType::Boolean),
    ("leveling_priorities", FieldType::String),
    ("limit_number_of_float_paths_to_calculate", FieldType::Boolean),
    ("location_unique_id", FieldType::Integer),
    ("make_open_ended_activities_critical", FieldType::Boolean),
    ("manager", FieldType::String),
    ("max_percent_to_overallocate_resources", FieldType::Numeric),
    ("maximum_number_of_float_paths_to_calculate", FieldType::Integer),
    ("microsoft_project_server_url", FieldType::Boolean),
    ("minutes_per_day", FieldType::Integer),
    ("minutes_per_month", FieldType::Integer),
    ("minutes_per_week", FieldType::Integer),
    ("minutes_per_year", FieldType::Integer),
    ("move_completed_ends_back", FieldType::Boolean),
    ("move_completed_ends_forward", FieldType::Boolean),
    ("move_remaining_starts_back", FieldType::Boolean),
    ("move_remaining_starts_forward", FieldType::Boolean),
    ("mpp_file_type", FieldType::Integer),
    ("mpx_code_page", FieldType::MpxCodePage),
    ("mpx_delimiter", FieldType::Char),
    ("mpx_file_version", FieldType::MpxFileVersion),
    ("mpx_program_name", FieldType::String),
    ("multiple_critical_paths", FieldType::Boolean),
    ("must_finish_by", FieldType::Date),
    ("name", FieldType::String),
    ("new_task_start_is_project_start", FieldType::Boolean),
    ("new_tasks_are_manual", FieldType::Boolean),
    ("new_tasks_effort_driven", FieldType::Boolean),
    ("new_tasks_estimated", FieldType::Boolean),
    ("notes", FieldType::Notes),
    ("percentage_complete", FieldType::Percentage),
    ("planned_start", FieldType::Date),
    ("pm_text", FieldType::String),
    ("presentation_format", FieldType::String),
    ("preserve_minimum_float_when_leveling", FieldType::Duration),
    ("preserve_scheduled_early_and_late_dates", FieldType::Boolean),
    ("project_code_values", FieldType::CodeValues),
    ("project_externally_edited", FieldType::Boolean),
    ("project_file_path", FieldType::String),
    ("project_id", FieldType::String),
    ("project_is_baseline", FieldType::Boolean),
    ("project_title", FieldType::String),
    ("project_website_url", FieldType::String),
    ("relationship_lag_calendar", FieldType::RelationshipLagCalendar),
    ("remove_file_properties", FieldType::Boolean),
    ("resource_pool_file", FieldType::String),
    ("revision", FieldType::Integer),
    ("schedule_from", FieldType::ScheduleFrom),
    ("scheduled_finish", FieldType::Date),
    ("scheduling_progressed_activities", FieldType::SchedulingProgressedActivities),
    ("short_application_name", FieldType::String),
    ("show_project_summary_task", FieldType::Boolean),
    ("split_in_progress_tasks", FieldType::Boolean),
    ("spread_actual_cost", FieldType::Boolean),
    ("spread_percent_complete", FieldType::Boolean),
    ("start_date", FieldType::Date),
    ("start_variance", FieldType::Duration),
    ("status_date", FieldType::Date),
    ("subject", FieldType::String),
    ("template", FieldType::String),
    ("thousands_separator", FieldType::Char),
    ("time_format", FieldType::ProjectTimeFormat),
    ("time_separator", FieldType::Char),
    ("total_slack_calculation_type", FieldType::TotalSlackType),
    ("unique_id", FieldType::Integer),
    ("updating_task_status_updates_resource_status", FieldType::Boolean),
    ("use_expected_finish_dates", FieldType::Boolean),
    ("wbs_code_separator", FieldType::String),
    ("week_start_day", FieldType::Day),
    ("work", FieldType::Work),
    ("work2", FieldType::Numeric),
];
