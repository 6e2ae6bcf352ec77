use crate::field_type::FieldType;

pub(crate) static ASSIGNMENT_FIELDS: &[(&str, FieldType)] = &[
    ("actual_cost", FieldType::Currency),
    ("actual_finish", FieldType::Date),
    ("actual_overtime_cost", FieldType::Currency),
    ("actual_overtime_work", FieldType::Work),
    ("actual_overtime_work_protected", FieldType::Work),
    ("actual_start", FieldType::Date),
    ("actual_work", FieldType::Work),
    ("actual_work_protected", FieldType::Work),
    ("acwp", FieldType::Currency),
    ("assignment_delay", FieldType::Delay),
    ("assignment_resource_guid", FieldType::Guid),
    ("assignment_task_guid", FieldType::Guid),
    ("assignment_units", FieldType::Units),
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
    ("budget_cost", FieldType::Currency),
    ("budget_work", FieldType::Work),
    ("calculate_costs_from_units", FieldType::Boolean),
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
    ("cost_account_unique_id", FieldType::Integer),
    ("cost_rate_table", FieldType::Short),
    ("cost_variance", FieldType::Currency),
    ("created", FieldType::Date),
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
    ("enterprise_duration2", FieldType::Duration),
    ("enterprise_duration3", FieldType::Duration),
    ("enterprise_duration4", FieldType::Duration),
    ("enterprise_duration5", FieldType::Duration),
    ("enterprise_duration6", FieldType::Duration),
    ("enterprise_duration7", FieldType::Duration),
    ("enterprise_duration8", FieldType::Duration),
    ("enterprise_duration9", FieldType::Duration),
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
    ("enterprise_resource_multi_value20", FieldType::String),
    ("enterprise_resource_multi_value21", FieldType::String),
    ("enterprise_resource_multi_value22", FieldType::String),
    ("enterprise_resource_multi_value23", FieldType::String),
    ("enterprise_resource_multi_value24", FieldType::String),
    ("enterprise_resource_multi_value25", FieldType::String),
    ("enterprise_resource_multi_value26", FieldType::String),
    ("enterprise_resource_multi_value27", FieldType::String),
    ("enterprise_resource_multi_value28", FieldType::String),
    ("enterprise_resource_multi_value29", FieldType::String),
    ("enterprise_resource_outline_code1", FieldType::String),
    ("enterprise_resource_outline_code10", FieldType::String),
    ("enterprise_resource_outline_code11", FieldType::String),
    ("enterprise_resource_outline_code12", FieldType::String),
    ("enterprise_resource_outline_code13", FieldType::String),
    ("enterprise_resource_outline_code14", FieldType::String),
    ("enterprise_resource_outline_code15", FieldType::String),
    ("enterprise_resource_outline_code16", FieldType::String),
    ("enterprise_resource_outline_code17", FieldType::String),
    ("enterprise_resource_outline_code18", FieldType::String),
    ("enterprise_resource_outline_code19", FieldType::String),
    ("enterprise_resource_outline_code2", FieldType::String),
    ("enterprise_resource_outline_code20", FieldType::String),
    ("enterprise_resource_outline_code21", FieldType::String),
    ("enterprise_resource_outline_code22", FieldType::String),
    ("enterprise_resource_outline_code23", FieldType::String),
    ("enterprise_resource_outline_code24", FieldType::String),
    ("enterprise_resource_outline_code25", FieldType::String),
    ("enterprise_resource_outline_code26", FieldType::String),
    ("enterprise_resource_outline_code27", FieldType::String),
    ("enterprise_resource_outline_code28", FieldType::String),
    ("enterprise_resource_outline_code29", FieldType::String),
    ("enterprise_resource_outline_code3", FieldType::String),
    ("enterprise_resource_outline_code4", FieldType::String),
    ("enterprise_resource_outline_code5", FieldType::String),
    ("enterprise_resource_outline_code6", FieldType::String),
    ("enterprise_resource_outline_code7", FieldType::String),
    ("enterprise_resource_outline_code8", FieldType::String),
    ("enterprise_resource_outline_code9", FieldType::String),
    ("enterprise_resource_rbs", FieldType::String),
    ("enterprise_team_member", FieldType::String),
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
    ("finish_variance", FieldType::Duration),
    ("fixed_material_assignment", FieldType::String),
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
    ("guid", FieldType::Guid),
    ("hyperlink", FieldType::String),
    ("hyperlink_address", FieldType::String),
    ("hyperlink_data", FieldType::Binary),
    ("hyperlink_href", FieldType::String),
    ("hyperlink_screen_tip", FieldType::String),
    ("hyperlink_subaddress", FieldType::String),
    ("index", FieldType::Integer),
    ("leveling_delay", FieldType::Duration),
    ("leveling_delay_units", FieldType::TimeUnits),
    ("linked_fields", FieldType::Boolean),
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
    ("overallocated", FieldType::Boolean),
    ("override_rate", FieldType::Rate),
    ("overtime_cost", FieldType::Currency),
    ("overtime_work", FieldType::Work),
    ("owner", FieldType::String),
    ("peak", FieldType::Units),
    ("percent_work_complete", FieldType::Percentage),
    ("planned_cost", FieldType::Currency),
    ("planned_finish", FieldType::Date),
    ("planned_start", FieldType::Date),
    ("planned_work", FieldType::Work),
    ("project", FieldType::String),
    ("rate_index", FieldType::Integer),
    ("rate_source", FieldType::RateSource),
    ("regular_work", FieldType::Work),
    ("remaining_assignment_units", FieldType::Units),
    ("remaining_cost", FieldType::Currency),
    ("remaining_early_finish", FieldType::Date),
    ("remaining_early_start", FieldType::Date),
    ("remaining_late_finish", FieldType::Date),
    ("remaining_late_start", FieldType::Date),
    ("remaining_overtime_cost", FieldType::Currency),
    ("remaining_overtime_work", FieldType::Work),
    ("remaining_work", FieldType::Work),
    ("resource_assignment_code_values", FieldType::CodeValues),
    ("resource_id", FieldType::Integer),
    ("resource_name", FieldType::String),
    ("resource_request_type", FieldType::ResourceRequestType),
    ("resource_type", FieldType::ResourceType),
    ("resource_unique_id", FieldType::Integer),
    ("response_pending", FieldType::Boolean),
    ("resume", FieldType::Date),
    ("role_unique_id", FieldType::Integer),
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
    ("start_variance", FieldType::Duration),
    ("stop", FieldType::Date),
    ("summary", FieldType::String),
    ("sv", FieldType::Currency),
    ("task_id", FieldType::Integer),
    ("task_name", FieldType::String),
    ("task_outline_number", FieldType::String),
    ("task_summary_name", FieldType::String),
    ("task_unique_id", FieldType::Integer),
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
    ("timephased_actual_overtime_work", FieldType::Binary),
    ("timephased_actual_work", FieldType::Binary),
    ("timephased_baseline10_cost", FieldType::Binary),
    ("timephased_baseline10_work", FieldType::Binary),
    ("timephased_baseline1_cost", FieldType::Binary),
    ("timephased_baseline1_work", FieldType::Binary),
    ("timephased_baseline2_cost", FieldType::Binary),
    ("timephased_baseline2_work", FieldType::Binary),
    ("timephased_baseline3_cost", FieldType::Binary),
    ("timephased_baseline3_work", FieldType::Binary),
    ("timephased_baseline4_cost", FieldType::Binary),
    ("timephased_baseline4_work", FieldType::Binary),
    ("timephased_baseline5_cost", FieldType::Binary),
    ("timephased_baseline5_work", FieldType::Binary),
    ("timephased_baseline6_cost", FieldType::Binary),
    ("timephased_baseline6_work", FieldType::Binary),
    ("timephased_baseline7_cost", FieldType::Binary),
    ("timephased_baseline7_work", FieldType::Binary),
    ("timephased_baseline8_cost", FieldType::Binary),
    ("timephased_baseline8_work", FieldType::Binary),
    ("timephased_baseline9_cost", FieldType::Binary),
    ("timephased_baseline9_work", FieldType::Binary),
    ("timephased_baseline_cost", FieldType::Binary),
    ("timephased_baseline_work", FieldType::Binary),
    ("timephased_work", FieldType::Binary),
    ("unavailable", FieldType::String),
    ("unique_id", FieldType::Integer),
    ("update_needed", FieldType::Boolean),
    ("vac", FieldType::Currency),
    ("variable_rate_units", FieldType::WorkUnits),
    ("wbs", FieldType::String),
    ("work", FieldType::Work),
    ("work_contour", FieldType::WorkContour),
    ("work_variance", FieldType::Work),
];
