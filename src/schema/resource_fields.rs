use crate::field_type::FieldType;

pub(crate) static RESOURCE_FIELDS: &[(&str, FieldType)] = &[
    ("accrue_at", FieldType::Accrue),
    ("active", FieldType::Boolean),
    ("actual_cost", FieldType::Currency),
    ("actual_finish", FieldType::Date),
    ("actual_overtime_cost", FieldType::Currency),
    ("actual_overtime_work", FieldType::Work),
    ("actual_overtime_work_protected", FieldType::Work),
    ("actual_start", FieldType::Date),
    ("actual_work", FieldType::Work),
    ("actual_work_protected", FieldType::Work),
    ("acwp", FieldType::Currency),
    ("assignment", FieldType::Boolean),
    ("assignment_delay", FieldType::Delay),
    ("assignment_owner", FieldType::String),
    ("assignment_units", FieldType::Units),
    ("availability_data", FieldType::Binary),
    ("available_from", FieldType::Date),
    ("available_to", FieldType::Date),
    ("base_calendar", FieldType::String),
    ("baseline10_budget_cost", FieldType::Currency),
    ("baseline10_budget_work", FieldType::Work),
    ("baseline10_cost", FieldType::Currency),
    ("baseline10_finish", FieldType::Date),
    ("baseline10_start", FieldType::Date),
    ("baseline10_work", FieldType::Work),
    ("baseline1_budget_cost", FieldType::Currency),
    ("baseline1_budget_work", FieldType::Work),
    ("baseline1_cost", FieldType::Currency),
    ("baseline1_finish", FieldType::Date),
    ("baseline1_start", FieldType::Date),
    ("baseline1_work", FieldType::Work),
    ("baseline2_budget_cost", FieldType::Currency),
    ("baseline2_budget_work", FieldType::Work),
    ("baseline2_cost", FieldType::Currency),
    ("baseline2_finish", FieldType::Date),
    ("baseline2_start", FieldType::Date),
    ("baseline2_work", FieldType::Work),
    ("baseline3_budget_cost", FieldType::Currency),
    ("baseline3_budget_work", FieldType::Work),
    ("baseline3_cost", FieldType::Currency),
    ("baseline3_finish", FieldType::Date),
    ("baseline3_start", FieldType::Date),
    ("baseline3_work", FieldType::Work),
    ("baseline4_budget_cost", FieldType::Currency),
    ("baseline4_budget_work", FieldType::Work),
    ("baseline4_cost", FieldType::Currency),
    ("baseline4_finish", FieldType::Date),
    ("baseline4_start", FieldType::Date),
    ("baseline4_work", FieldType::Work),
    ("baseline5_budget_cost", FieldType::Currency),
    ("baseline5_budget_work", FieldType::Work),
    ("baseline5_cost", FieldType::Currency),
    ("baseline5_finish", FieldType::Date),
    ("baseline5_start", FieldType::Date),
    ("baseline5_work", FieldType::Work),
    ("baseline6_budget_cost", FieldType::Currency),
    ("baseline6_budget_work", FieldType::Work),
    ("baseline6_cost", FieldType::Currency),
    ("baseline6_finish", FieldType::Date),
    ("baseline6_start", FieldType::Date),
    ("baseline6_work", FieldType::Work),
    ("baseline7_budget_cost", FieldType::Currency),
    ("baseline7_budget_work", FieldType::Work),
    ("baseline7_cost", FieldType::Currency),
    ("baseline7_finish", FieldType::Date),
    ("baseline7_start", FieldType::Date),
    ("baseline7_work", FieldType::Work),
    ("baseline8_budget_cost", FieldType::Currency),
    ("baseline8_budget_work", FieldType::Work),
    ("baseline8_cost", FieldType::Currency),
    ("baseline8_finish", FieldType::Date),
    ("baseline8_start", FieldType::Date),
    ("baseline8_work", FieldType::Work),
    ("baseline9_budget_cost", FieldType::Currency),
    ("baseline9_budget_work", FieldType::Work),
    ("baseline9_cost", FieldType::Currency),
    ("baseline9_finish", FieldType::Date),
    ("baseline9_start", FieldType::Date),
    ("baseline9_work", FieldType::Work),
    ("baseline_budget_cost", FieldType::Currency),
    ("baseline_budget_work", FieldType::Work),
    ("baseline_cost", FieldType::Currency),
    ("baseline_finish", FieldType::Date),
    ("baseline_start", FieldType::Date),
    ("baseline_work", FieldType::Work),
    ("bcwp", FieldType::Currency),
    ("bcws", FieldType::Currency),
    ("booking_type", FieldType::BookingType),
    ("budget", FieldType::Boolean),
    ("budget_cost", FieldType::Currency),
    ("budget_work", FieldType::Work),
    ("calculate_costs_from_units", FieldType::Boolean),
    ("calendar_guid", FieldType::Guid),
    ("calendar_unique_id", FieldType::Integer),
    ("can_level", FieldType::Boolean),
    ("code", FieldType::String),
    ("confirmed", FieldType::Boolean),
    ("cost", FieldType::Currency),
    ("cost1", FieldType::Currency),
    ("cost10", FieldType::Currency),
    ("cost2", FieldType::Currency),
    ("cost3", FieldType::Currency),
    ("cost4", FieldType::Currency),
    ("cost5", FieldType::Currency),
    ("cost6", FieldType::Currency),
    ("cost7", FieldType::Currency),
    ("cost8", FieldType::Currency),
    ("cost9", FieldType::Currency),
    ("cost_center", FieldType::String),
    ("cost_per_use", FieldType::Currency),
    ("cost_rate_a", FieldType::Binary),
    ("cost_rate_b", FieldType::Binary),
    ("cost_rate_c", FieldType::Binary),
    ("cost_rate_d", FieldType::Binary),
    ("cost_rate_e", FieldType::Binary),
    ("cost_rate_table", FieldType::Short),
    ("cost_variance", FieldType::Currency),
    ("created", FieldType::Date),
    ("currency_unique_id", FieldType::Integer),
    ("cv", FieldType::Currency),
    ("date1", FieldType::Date),
    ("date10", FieldType::Date),
    ("date2", FieldType::Date),
    ("date3", FieldType::Date),
    ("date4", FieldType::Date),
    ("date5", FieldType::Date),
    ("date6", FieldType::Date),
    ("date7", FieldType::Date),
    ("date8", FieldType::Date),
    ("date9", FieldType::Date),
    ("default_assignment_owner", FieldType::String),
    ("default_units", FieldType::Units),
    ("description", FieldType::String),
    ("duration1", FieldType::Duration),
    ("duration10", FieldType::Duration),
    ("duration10_units", FieldType::TimeUnits),
    ("duration1_units", FieldType::TimeUnits),
    ("duration2", FieldType::Duration),
    ("duration2_units", FieldType::TimeUnits),
    ("duration3", FieldType::Duration),
    ("duration3_units", FieldType::TimeUnits),
    ("duration4", FieldType::Duration),
    ("duration4_units", FieldType::TimeUnits),
    ("duration5", FieldType::Duration),
    ("duration5_units", FieldType::TimeUnits),
    ("duration6", FieldType::Duration),
    ("duration6_units", FieldType::TimeUnits),
    ("duration7", FieldType::Duration),
    ("duration7_units", FieldType::TimeUnits),
    ("duration8", FieldType::Duration),
    ("duration8_units", FieldType::TimeUnits),
    ("duration9", FieldType::Duration),
    ("duration9_units", FieldType::TimeUnits),
    ("email_address", FieldType::String),
    ("engagement_status", FieldType::String),
    ("enterprise", FieldType::Boolean),
    ("enterprise_base_calendar", FieldType::Boolean),
    ("enterprise_checked_out_by", FieldType::String),
    ("enterprise_cost1", FieldType::Currency),
    ("enterprise_cost10", FieldType::Currency),
    ("enterprise_cost2", FieldType::Currency),
    ("enterprise_cost3", FieldType::Currency),
    ("enterprise_cost4", FieldType::Currency),
    ("enterprise_cost5", FieldType::Currency),
    ("enterprise_cost6", FieldType::Currency),
    ("enterprise_cost7", FieldType::Currency),
    ("enterprise_cost8", FieldType::Currency),
    ("enterprise_cost9", FieldType::Currency),
    ("enterprise_data", FieldType::Binary),
    ("enterprise_date1", FieldType::Date),
    ("enterprise_date10", FieldType::Date),
    ("enterprise_date11", FieldType::Date),
    ("enterprise_date12", FieldType::Date),
    ("enterprise_date13", FieldType::Date),
    ("enterprise_date14", FieldType::Date),
    ("enterprise_date15", FieldType::Date),
    ("enterprise_date16", FieldType::Date),
    ("enterprise_date17", FieldType::Date),
    ("enterprise_date18", FieldType::Date),
    ("enterprise_date19", FieldType::Date),
    ("enterprise_date2", FieldType::Date),
    ("enterprise_date20", FieldType::Date),
    ("enterprise_date21", FieldType::Date),
    ("enterprise_date22", FieldType::Date),
    ("enterprise_date23", FieldType::Date),
    ("enterprise_date24", FieldType::Date),
    ("enterprise_date25", FieldType::Date),
    ("enterprise_date26", FieldType::Date),
    ("enterprise_date27", FieldType::Date),
    ("enterprise_date28", FieldType::Date),
    ("enterprise_date29", FieldType::Date),
    ("enterprise_date3", FieldType::Date),
    ("enterprise_date30", FieldType::Date),
    ("enterprise_date4", FieldType::Date),
    ("enterprise_date5", FieldType::Date),
    ("enterprise_date6", FieldType::Date),
    ("enterprise_date7", FieldType::Date),
    ("enterprise_date8", FieldType::Date),
    ("enterprise_date9", FieldType::Date),
    ("enterprise_duration1", FieldType::Duration),
    ("enterprise_duration10", FieldType::Duration),
    ("enterprise_duration10_units", FieldType::TimeUnits),
    ("enterprise_duration1_units", FieldType::TimeUnits),
    ("enterprise_duration2", FieldType::Duration),
    ("enterprise_duration2_units", FieldType::TimeUnits),
    ("enterprise_duration3", FieldType::Duration),
    ("enterprise_duration3_units", FieldType::TimeUnits),
    ("enterprise_duration4", FieldType::Duration),
    ("enterprise_duration4_units", FieldType::TimeUnits),
    ("enterprise_duration5", FieldType::Duration),
    ("enterprise_duration5_units", FieldType::TimeUnits),
    ("enterprise_duration6", FieldType::Duration),
    ("enterprise_duration6_units", FieldType::TimeUnits),
    ("enterprise_duration7", FieldType::Duration),
    ("enterprise_duration7_units", FieldType::TimeUnits),
    ("enterprise_duration8", FieldType::Duration),
    ("enterprise_duration8_units", FieldType::TimeUnits),
    ("enterprise_duration9", FieldType::Duration),
    ("enterprise_duration9_units", FieldType::TimeUnits),
    ("enterprise_flag1", FieldType::Boolean),
    ("enterprise_flag10", FieldType::Boolean),
    ("enterprise_flag11", FieldType::Boolean),
    ("enterprise_flag12", FieldType::Boolean),
    ("enterprise_flag13", FieldType::Boolean),
    ("enterprise_flag14", FieldType::Boolean),
    ("enterprise_flag15", FieldType::Boolean),
    ("enterprise_flag16", FieldType::Boolean),
    ("enterprise_flag17", FieldType::Boolean),
    ("enterprise_flag18", FieldType::Boolean),
    ("enterprise_flag19", FieldType::Boolean),
    ("enterprise_flag2", FieldType::Boolean),
    ("enterprise_flag20", FieldType::Boolean),
    ("enterprise_flag3", FieldType::Boolean),
    ("enterprise_flag4", FieldType::Boolean),
    ("enterprise_flag5", FieldType::Boolean),
    ("enterprise_flag6", FieldType::Boolean),
    ("enterprise_flag7", FieldType::Boolean),
    ("enterprise_flag8", FieldType::Boolean),
    ("enterprise_flag9", FieldType::Boolean),
    ("enterprise_is_checked_out", FieldType::Boolean),
    ("enterprise_last_modified_date", FieldType::Date),
    ("enterprise_multi_value20", FieldType::String),
    ("enterprise_multi_value21", FieldType::String),
    ("enterprise_multi_value22", FieldType::String),
    ("enterprise_multi_value23", FieldType::String),
    ("enterprise_multi_value24", FieldType::String),
    ("enterprise_multi_value25", FieldType::String),
    ("enterprise_multi_value26", FieldType::String),
    ("enterprise_multi_value27", FieldType::String),
    ("enterprise_multi_value28", FieldType::String),
    ("enterprise_multi_value29", FieldType::String),
    ("enterprise_name_used", FieldType::String),
    ("enterprise_number1", FieldType::Numeric),
    ("enterprise_number10", FieldType::Numeric),
    ("enterprise_number11", FieldType::Numeric),
    ("enterprise_number12", FieldType::Numeric),
    ("enterprise_number13", FieldType::Numeric),
    ("enterprise_number14", FieldType::Numeric),
    ("enterprise_number15", FieldType::Numeric),
    ("enterprise_number16", FieldType::Numeric),
    ("enterprise_number17", FieldType::Numeric),
    ("enterprise_number18", FieldType::Numeric),
    ("enterprise_number19", FieldType::Numeric),
    ("enterprise_number2", FieldType::Numeric),
    ("enterprise_number20", FieldType::Numeric),
    ("enterprise_number21", FieldType::Numeric),
    ("enterprise_number22", FieldType::Numeric),
    ("enterprise_number23", FieldType::Numeric),
    ("enterprise_number24", FieldType::Numeric),
    ("enterprise_number25", FieldType::Numeric),
    ("enterprise_number26", FieldType::Numeric),
    ("enterprise_number27", FieldType::Numeric),
    ("enterprise_number28", FieldType::Numeric),
    ("enterprise_number29", FieldType::Numeric),
    ("enterprise_number3", FieldType::Numeric),
    ("enterprise_number30", FieldType::Numeric),
    ("enterprise_number31", FieldType::Numeric),
    ("enterprise_number32", FieldType::Numeric),
    ("enterprise_number33", FieldType::Numeric),
    ("enterprise_number34", FieldType::Numeric),
    ("enterprise_number35", FieldType::Numeric),
    ("enterprise_number36", FieldType::Numeric),
    ("enterprise_number37", FieldType::Numeric),
    ("enterprise_number38", FieldType::Numeric),
    ("enterprise_number39", FieldType::Numeric),
    ("enterprise_number4", FieldType::Numeric),
    ("enterprise_number40", FieldType::Numeric),
    ("enterprise_number5", FieldType::Numeric),
    ("enterprise_number6", FieldType::Numeric),
    ("enterprise_number7", FieldType::Numeric),
    ("enterprise_number8", FieldType::Numeric),
    ("enterprise_number9", FieldType::Numeric),
    ("enterprise_outline_code1", FieldType::String),
    ("enterprise_outline_code10", FieldType::String),
    ("enterprise_outline_code11", FieldType::String),
    ("enterprise_outline_code12", FieldType::String),
    ("enterprise_outline_code13", FieldType::String),
    ("enterprise_outline_code14", FieldType::String),
    ("enterprise_outline_code15", FieldType::String),
    ("enterprise_outline_code16", FieldType::String),
    ("enterprise_outline_code17", FieldType::String),
    ("enterprise_outline_code18", FieldType::String),
    ("enterprise_outline_code19", FieldType::String),
    ("enterprise_outline_code2", FieldType::String),
    ("enterprise_outline_code20", FieldType::String),
    ("enterprise_outline_code21", FieldType::String),
    ("enterprise_outline_code22", FieldType::String),
    ("enterprise_outline_code23", FieldType::String),
    ("enterprise_outline_code24", FieldType::String),
    ("enterprise_outline_code25", FieldType::String),
    ("enterprise_outline_code26", FieldType::String),
    ("enterprise_outline_code27", FieldType::String),
    ("enterprise_outline_code28", FieldType::String),
    ("enterprise_outline_code29", FieldType::String),
    ("enterprise_outline_code3", FieldType::String),
    ("enterprise_outline_code4", FieldType::String),
    ("enterprise_outline_code5", FieldType::String),
    ("enterprise_outline_code6", FieldType::String),
    ("enterprise_outline_code7", FieldType::String),
    ("enterprise_outline_code8", FieldType::String),
    ("enterprise_outline_code9", FieldType::String),
    ("enterprise_rbs", FieldType::String),
    ("enterprise_required_values", FieldType::Boolean),
    ("enterprise_team_member", FieldType::Boolean),
    ("enterprise_text1", FieldType::String),
    ("enterprise_text10", FieldType::String),
    ("enterprise_text11", FieldType::String),
    ("enterprise_text12", FieldType::String),
    ("enterprise_text13", FieldType::String),
    ("enterprise_text14", FieldType::String),
    ("enterprise_text15", FieldType::String),
    ("enterprise_text16", FieldType::String),
    ("enterprise_text17", FieldType::String),
    ("enterprise_text18", FieldType::String),
    ("enterprise_text19", FieldType::String),
    ("enterprise_text2", FieldType::String),
    ("enterprise_text20", FieldType::String),
    ("enterprise_text21", FieldType::String),
    ("enterprise_text22", FieldType::String),
    ("enterprise_text23", FieldType::String),
    ("enterprise_text24", FieldType::String),
    ("enterprise_text25", FieldType::String),
    ("enterprise_text26", FieldType::String),
    ("enterprise_text27", FieldType::String),
    ("enterprise_text28", FieldType::String),
    ("enterprise_text29", FieldType::String),
    ("enterprise_text3", FieldType::String),
    ("enterprise_text30", FieldType::String),
    ("enterprise_text31", FieldType::String),
    ("enterprise_text32", FieldType::String),
    ("enterprise_text33", FieldType::String),
    ("enterprise_text34", FieldType::String),
    ("enterprise_text35", FieldType::String),
    ("enterprise_text36", FieldType::String),
    ("enterprise_text37", FieldType::String),
    ("enterprise_text38", FieldType::String),
    ("enterprise_text39", FieldType::String),
    ("enterprise_text4", FieldType::String),
    ("enterprise_text40", FieldType::String),
    ("enterprise_text5", FieldType::String),
    ("enterprise_text6", FieldType::String),
    ("enterprise_text7", FieldType::String),
    ("enterprise_text8", FieldType::String),
    ("enterprise_text9", FieldType::String),
    ("enterprise_unique_id", FieldType::Integer),
    ("error_message", FieldType::String),
    ("expenses_only", FieldType::Boolean),
    ("finish", FieldType::Date),
    ("finish1", FieldType::Date),
    ("finish10", FieldType::Date),
    ("finish2", FieldType::Date),
    ("finish3", FieldType::Date),
    ("finish4", FieldType::Date),
    ("finish5", FieldType::Date),
    ("finish6", FieldType::Date),
    ("finish7", FieldType::Date),
    ("finish8", FieldType::Date),
    ("finish9", FieldType::Date),
    ("flag1", FieldType::Boolean),
    ("flag10", FieldType::Boolean),
    ("flag11", FieldType::Boolean),
    ("flag12", FieldType::Boolean),
    ("flag13", FieldType::Boolean),
    ("flag14", FieldType::Boolean),
    ("flag15", FieldType::Boolean),
    ("flag16", FieldType::Boolean),
    ("flag17", FieldType::Boolean),
    ("flag18", FieldType::Boolean),
    ("flag19", FieldType::Boolean),
    ("flag2", FieldType::Boolean),
    ("flag20", FieldType::Boolean),
    ("flag3", FieldType::Boolean),
    ("flag4", FieldType::Boolean),
    ("flag5", FieldType::Boolean),
    ("flag6", FieldType::Boolean),
    ("flag7", FieldType::Boolean),
    ("flag8", FieldType::Boolean),
    ("flag9", FieldType::Boolean),
    ("generic", FieldType::Boolean),
    ("group", FieldType::String),
    ("group_by_summary", FieldType::Boolean),
    ("guid", FieldType::Guid),
    ("hyperlink", FieldType::String),
    ("hyperlink_address", FieldType::String),
    ("hyperlink_data", FieldType::Binary),
    ("hyperlink_href", FieldType::String),
    ("hyperlink_screen_tip", FieldType::String),
    ("hyperlink_subaddress", FieldType::String),
    ("id", FieldType::Integer),
    ("import", FieldType::Boolean),
    ("inactive", FieldType::Boolean),
    ("index", FieldType::Integer),
    ("indicators", FieldType::String),
    ("initials", FieldType::String),
    ("leveling_delay", FieldType::Duration),
    ("linked_fields", FieldType::Boolean),
    ("location_unique_id", FieldType::Integer),
    ("material_label", FieldType::String),
    ("max_units", FieldType::Units),
    ("modify_on_integrate", FieldType::Boolean),
    ("name", FieldType::String),
    ("notes", FieldType::Notes),
    ("number1", FieldType::Numeric),
    ("number10", FieldType::Numeric),
    ("number11", FieldType::Numeric),
    ("number12", FieldType::Numeric),
    ("number13", FieldType::Numeric),
    ("number14", FieldType::Numeric),
    ("number15", FieldType::Numeric),
    ("number16", FieldType::Numeric),
    ("number17", FieldType::Numeric),
    ("number18", FieldType::Numeric),
    ("number19", FieldType::Numeric),
    ("number2", FieldType::Numeric),
    ("number20", FieldType::Numeric),
    ("number3", FieldType::Numeric),
    ("number4", FieldType::Numeric),
    ("number5", FieldType::Numeric),
    ("number6", FieldType::Numeric),
    ("number7", FieldType::Numeric),
    ("number8", FieldType::Numeric),
    ("number9", FieldType::Numeric),
    ("objects", FieldType::Numeric),
    ("outline_code1", FieldType::String),
    ("outline_code10", FieldType::String),
    ("outline_code10_index", FieldType::Integer),
    ("outline_code1_index", FieldType::Integer),
    ("outline_code2", FieldType::String),
    ("outline_code2_index", FieldType::Integer),
    ("outline_code3", FieldType::String),
    ("outline_code3_index", FieldType::Integer),
    ("outline_code4", FieldType::String),
    ("outline_code4_index", FieldType::Integer),
    ("outline_code5", FieldType::String),
    ("outline_code5_index", FieldType::Integer),
    ("outline_code6", FieldType::String),
    ("outline_code6_index", FieldType::Integer),
    ("outline_code7", FieldType::String),
    ("outline_code7_index", FieldType::Integer),
    ("outline_code8", FieldType::String),
    ("outline_code8_index", FieldType::Integer),
    ("outline_code9", FieldType::String),
    ("outline_code9_index", FieldType::Integer),
    ("overallocated", FieldType::Boolean),
    ("overtime_cost", FieldType::Currency),
    ("overtime_rate", FieldType::Rate),
    ("overtime_rate_units", FieldType::RateUnits),
    ("overtime_work", FieldType::Work),
    ("parent_id", FieldType::Integer),
    ("peak", FieldType::Units),
    ("per_day", FieldType::Numeric),
    ("percent_work_complete", FieldType::Percentage),
    ("period_dur", FieldType::Numeric),
    ("phone", FieldType::String),
    ("phonetics", FieldType::String),
    ("pool", FieldType::Numeric),
    ("primary_role_unique_id", FieldType::Integer),
    ("priority", FieldType::Numeric),
    ("project", FieldType::String),
    ("proposed_finish", FieldType::Date),
    ("proposed_max_units", FieldType::Units),
    ("proposed_start", FieldType::Date),
    ("rate", FieldType::Numeric),
    ("regular_work", FieldType::Work),
    ("remaining_cost", FieldType::Currency),
    ("remaining_overtime_cost", FieldType::Currency),
    ("remaining_overtime_work", FieldType::Work),
    ("remaining_work", FieldType::Work),
    ("request_demand", FieldType::String),
    ("resource_code_values", FieldType::CodeValues),
    ("resource_id", FieldType::String),
    ("response_pending", FieldType::Boolean),
    ("role", FieldType::Boolean),
    ("role_code_values", FieldType::CodeValues),
    ("sequence_number", FieldType::Integer),
    ("shift_unique_id", FieldType::Integer),
    ("standard_rate", FieldType::Rate),
    ("standard_rate_units", FieldType::RateUnits),
    ("start", FieldType::Date),
    ("start1", FieldType::Date),
    ("start10", FieldType::Date),
    ("start2", FieldType::Date),
    ("start3", FieldType::Date),
    ("start4", FieldType::Date),
    ("start5", FieldType::Date),
    ("start6", FieldType::Date),
    ("start7", FieldType::Date),
    ("start8", FieldType::Date),
    ("start9", FieldType::Date),
    ("subproject_resource_unique_id", FieldType::Integer),
    ("summary", FieldType::String),
    ("supply_reference", FieldType::String),
    ("sv", FieldType::Currency),
    ("task_outline_number", FieldType::String),
    ("task_summary_name", FieldType::String),
    ("team_assignment_pool", FieldType::Boolean),
    ("team_status_pending", FieldType::Boolean),
    ("text1", FieldType::String),
    ("text10", FieldType::String),
    ("text11", FieldType::String),
    ("text12", FieldType::String),
    ("text13", FieldType::String),
    ("text14", FieldType::String),
    ("text15", FieldType::String),
    ("text16", FieldType::String),
    ("text17", FieldType::String),
    ("text18", FieldType::String),
    ("text19", FieldType::String),
    ("text2", FieldType::String),
    ("text20", FieldType::String),
    ("text21", FieldType::String),
    ("text22", FieldType::String),
    ("text23", FieldType::String),
    ("text24", FieldType::String),
    ("text25", FieldType::String),
    ("text26", FieldType::String),
    ("text27", FieldType::String),
    ("text28", FieldType::String),
    ("text29", FieldType::String),
    ("text3", FieldType::String),
    ("text30", FieldType::String),
    ("text4", FieldType::String),
    ("text5", FieldType::String),
    ("text6", FieldType::String),
    ("text7", FieldType::String),
    ("text8", FieldType::String),
    ("text9", FieldType::String),
    ("type", FieldType::ResourceType),
    ("unavailable", FieldType::String),
    ("unique_id", FieldType::Integer),
    ("unit", FieldType::String),
    ("unit_of_measure_unique_id", FieldType::Integer),
    ("update_needed", FieldType::Boolean),
    ("vac", FieldType::Currency),
    ("wbs", FieldType::String),
    ("windows_user_account", FieldType::String),
    ("work", FieldType::Work),
    ("work_contour", FieldType::WorkContour),
    ("work_variance", FieldType::Duration),
    ("workgroup", FieldType::Workgroup),
];
