use crate::field_type::FieldType;

pub(crate) static TASK_FIELDS: &[(&str, FieldType)] = &[
    ("active", FieldType::Boolean),
    ("activity_code_values", FieldType::ActivityCodeValues),
    ("activity_id", FieldType::String),
    ("activity_percent_complete", FieldType::Percentage),
    ("activity_status", FieldType::ActivityStatus),
    ("activity_type", FieldType::ActivityType),
    ("actual_cost", FieldType::Currency),
    ("actual_duration", FieldType::Duration),
    ("actual_duration_units", FieldType::TimeUnits),
    ("actual_finish", FieldType::Date),
    ("actual_overtime_cost", FieldType::Currency),
    ("actual_overtime_work", FieldType::Work),
    ("actual_overtime_work_protected", FieldType::Work),
    ("actual_start", FieldType::Date),
    ("actual_work", FieldType::Work),
    ("actual_work_labor", FieldType::Duration),
    ("actual_work_nonlabor", FieldType::Duration),
    ("actual_work_protected", FieldType::Work),
    ("acwp", FieldType::Currency),
    ("assignment", FieldType::Boolean),
    ("assignment_delay", FieldType::String),
    ("assignment_owner", FieldType::String),
    ("assignment_units", FieldType::String),
    ("bar_name", FieldType::String),
    ("baseline10_budget_cost", FieldType::Currency),
    ("baseline10_budget_work", FieldType::Work),
    ("baseline10_cost", FieldType::Currency),
    ("baseline10_deliverable_finish", FieldType::Date),
    ("baseline10_deliverable_start", FieldType::Date),
    ("baseline10_duration", FieldType::Duration),
    ("baseline10_duration_estimated", FieldType::Boolean),
    ("baseline10_duration_units", FieldType::TimeUnits),
    ("baseline10_estimated_duration", FieldType::Duration),
    ("baseline10_estimated_finish", FieldType::Date),
    ("baseline10_estimated_start", FieldType::Date),
    ("baseline10_finish", FieldType::Date),
    ("baseline10_fixed_cost", FieldType::Currency),
    ("baseline10_fixed_cost_accrual", FieldType::Accrue),
    ("baseline10_start", FieldType::Date),
    ("baseline10_work", FieldType::Work),
    ("baseline1_budget_cost", FieldType::Currency),
    ("baseline1_budget_work", FieldType::Work),
    ("baseline1_cost", FieldType::Currency),
    ("baseline1_deliverable_finish", FieldType::Date),
    ("baseline1_deliverable_start", FieldType::Date),
    ("baseline1_duration", FieldType::Duration),
    ("baseline1_duration_estimated", FieldType::Boolean),
    ("baseline1_duration_units", FieldType::TimeUnits),
    ("baseline1_estimated_duration", FieldType::Duration),
    ("baseline1_estimated_finish", FieldType::Date),
    ("baseline1_estimated_start", FieldType::Date),
    ("baseline1_finish", FieldType::Date),
    ("baseline1_fixed_cost", FieldType::Currency),
    ("baseline1_fixed_cost_accrual", FieldType::Accrue),
    ("baseline1_start", FieldType::Date),
    ("baseline1_work", FieldType::Work),
    ("baseline2_budget_cost", FieldType::Currency),
    ("baseline2_budget_work", FieldType::Work),
    ("baseline2_cost", FieldType::Currency),
    ("baseline2_deliverable_finish", FieldType::Date),
    ("baseline2_deliverable_start", FieldType::Date),
    ("baseline2_duration", FieldType::Duration),
    ("baseline2_duration_estimated", FieldType::Boolean),
    ("baseline2_duration_units", FieldType::TimeUnits),
    ("baseline2_estimated_duration", FieldType::Duration),
    ("baseline2_estimated_finish", FieldType::Date),
    ("baseline2_estimated_start", FieldType::Date),
    ("baseline2_finish", FieldType::Date),
    ("baseline2_fixed_cost", FieldType::Currency),
    ("baseline2_fixed_cost_accrual", FieldType::Accrue),
    ("baseline2_start", FieldType::Date),
    ("baseline2_work", FieldType::Work),
    ("baseline3_budget_cost", FieldType::Currency),
    ("baseline3_budget_work", FieldType::Work),
    ("baseline3_cost", FieldType::Currency),
    ("baseline3_deliverable_finish", FieldType::Date),
    ("baseline3_deliverable_start", FieldType::Date),
    ("baseline3_duration", FieldType::Duration),
    ("baseline3_duration_estimated", FieldType::Boolean),
    ("baseline3_duration_units", FieldType::TimeUnits),
    ("baseline3_estimated_duration", FieldType::Duration),
    ("baseline3_estimated_finish", FieldType::Date),
    ("baseline3_estimated_start", FieldType::Date),
    ("baseline3_finish", FieldType::Date),
    ("baseline3_fixed_cost", FieldType::Currency),
    ("baseline3_fixed_cost_accrual", FieldType::Accrue),
    ("baseline3_start", FieldType::Date),
    ("baseline3_work", FieldType::Work),
    ("baseline4_budget_cost", FieldType::Currency),
    ("baseline4_budget_work", FieldType::Work),
    ("baseline4_cost", FieldType::Currency),
    ("baseline4_deliverable_finish", FieldType::Date),
    ("baseline4_deliverable_start", FieldType::Date),
    ("baseline4_duration", FieldType::Duration),
    ("baseline4_duration_estimated", FieldType::Boolean),
    ("baseline4_duration_units", FieldType::TimeUnits),
    ("baseline4_estimated_duration", FieldType::Duration),
    ("baseline4_estimated_finish", FieldType::Date),
    ("baseline4_estimated_start", FieldType::Date),
    ("baseline4_finish", FieldType::Date),
    ("baseline4_fixed_cost", FieldType::Currency),
    ("baseline4_fixed_cost_accrual", FieldType::Accrue),
    ("baseline4_start", FieldType::Date),
    ("baseline4_work", FieldType::Work),
    ("baseline5_budget_cost", FieldType::Currency),
    ("baseline5_budget_work", FieldType::Work),
    ("baseline5_cost", FieldType::Currency),
    ("baseline5_deliverable_finish", FieldType::Date),
    ("baseline5_deliverable_start", FieldType::Date),
    ("baseline5_duration", FieldType::Duration),
    ("baseline5_duration_estimated", FieldType::Boolean),
    ("baseline5_duration_units", FieldType::TimeUnits),
    ("baseline5_estimated_duration", FieldType::Duration),
    ("baseline5_estimated_finish", FieldType::Date),
    ("baseline5_estimated_start", FieldType::Date),
    ("baseline5_finish", FieldType::Date),
    ("baseline5_fixed_cost", FieldType::Currency),
    ("baseline5_fixed_cost_accrual", FieldType::Accrue),
    ("baseline5_start", FieldType::Date),
    ("baseline5_work", FieldType::Work),
    ("baseline6_budget_cost", FieldType::Currency),
    ("baseline6_budget_work", FieldType::Work),
    ("baseline6_cost", FieldType::Currency),
    ("baseline6_deliverable_finish", FieldType::Date),
    ("baseline6_deliverable_start", FieldType::Date),
    ("baseline6_duration", FieldType::Duration),
    ("baseline6_duration_estimated", FieldType::Boolean),
    ("baseline6_duration_units", FieldType::TimeUnits),
    ("baseline6_estimated_duration", FieldType::Duration),
    ("baseline6_estimated_finish", FieldType::Date),
    ("baseline6_estimated_start", FieldType::Date),
    ("baseline6_finish", FieldType::Date),
    ("baseline6_fixed_cost", FieldType::Currency),
    ("baseline6_fixed_cost_accrual", FieldType::Accrue),
    ("baseline6_start", FieldType::Date),
    ("baseline6_work", FieldType::Work),
    ("baseline7_budget_cost", FieldType::Currency),
    ("baseline7_budget_work", FieldType::Work),
    ("baseline7_cost", FieldType::Currency),
    ("baseline7_deliverable_finish", FieldType::Date),
    ("baseline7_deliverable_start", FieldType::Date),
    ("baseline7_duration", FieldType::Duration),
    ("baseline7_duration_estimated", FieldType::Boolean),
    ("baseline7_duration_units", FieldType::TimeUnits),
    ("baseline7_estimated_duration", FieldType::Duration),
    ("baseline7_estimated_finish", FieldType::Date),
    ("baseline7_estimated_start", FieldType::Date),
    ("baseline7_finish", FieldType::Date),
    ("baseline7_fixed_cost", FieldType::Currency),
    ("baseline7_fixed_cost_accrual", FieldType::Accrue),
    ("baseline7_start", FieldType::Date),
    ("baseline7_work", FieldType::Work),
    ("baseline8_budget_cost", FieldType::Currency),
    ("baseline8_budget_work", FieldType::Work),
    ("baseline8_cost", FieldType::Currency),
    ("baseline8_deliverable_finish", FieldType::Date),
    ("baseline8_deliverable_start", FieldType::Date),
    ("baseline8_duration", FieldType::Duration),
    ("baseline8_duration_estimated", FieldType::Boolean),
    ("baseline8_duration_units", FieldType::TimeUnits),
    ("baseline8_estimated_duration", FieldType::Duration),
    ("baseline8_estimated_finish", FieldType::Date),
    ("baseline8_estimated_start", FieldType::Date),
    ("baseline8_finish", FieldType::Date),
    ("baseline8_fixed_cost", FieldType::Currency),
    ("baseline8_fixed_cost_accrual", FieldType::Accrue),
    ("baseline8_start", FieldType::Date),
    ("baseline8_work", FieldType::Work),
    ("baseline9_budget_cost", FieldType::Currency),
    ("baseline9_budget_work", FieldType::Work),
    ("baseline9_cost", FieldType::Currency),
    ("baseline9_deliverable_finish", FieldType::Date),
    ("baseline9_deliverable_start", FieldType::Date),
    ("baseline9_duration", FieldType::Duration),
    ("baseline9_duration_estimated", FieldType::Boolean),
    ("baseline9_duration_units", FieldType::TimeUnits),
    ("baseline9_estimated_duration", FieldType::Duration),
    ("baseline9_estimated_finish", FieldType::Date),
    ("baseline9_estimated_start", FieldType::Date),
    ("baseline9_finish", FieldType::Date),
    ("baseline9_fixed_cost", FieldType::Currency),
    ("baseline9_fixed_cost_accrual", FieldType::Accrue),
    ("baseline9_start", FieldType::Date),
    ("baseline9_work", FieldType::Work),
    ("baseline_budget_cost", FieldType::Currency),
    ("baseline_budget_work", FieldType::Work),
    ("baseline_cost", FieldType::Currency),
    ("baseline_deliverable_finish", FieldType::Date),
    ("baseline_deliverable_start", FieldType::Date),
    ("baseline_duration", FieldType::Duration),
    ("baseline_duration_estimated", FieldType::Boolean),
    ("baseline_duration_units", FieldType::TimeUnits),
    ("baseline_estimated_duration", FieldType::Duration),
    ("baseline_estimated_finish", FieldType::Date),
    ("baseline_estimated_start", FieldType::Date),
    ("baseline_finish", FieldType::Date),
    ("baseline_fixed_cost", FieldType::Currency),
    ("baseline_fixed_cost_accrual", FieldType::Accrue),
    ("baseline_start", FieldType::Date),
    ("baseline_work", FieldType::Work),
    ("bcwp", FieldType::Currency),
    ("bcws", FieldType::Currency),
    ("bid_item", FieldType::String),
    ("board_status", FieldType::String),
    ("board_status_id", FieldType::Integer),
    ("budget_cost", FieldType::Currency),
    ("budget_work", FieldType::Work),
    ("calendar_unique_id", FieldType::Integer),
    ("category_of_work", FieldType::String),
    ("complete_through", FieldType::Date),
    ("confirmed", FieldType::Boolean),
    ("constraint_date", FieldType::Date),
    ("constraint_type", FieldType::Constraint),
    ("contact", FieldType::String),
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
    ("cost_rate_table", FieldType::String),
    ("cost_variance", FieldType::Currency),
    ("cpi", FieldType::Numeric),
    ("created", FieldType::Date),
    ("critical", FieldType::Boolean),
    ("cv", FieldType::Currency),
    ("cvpercent", FieldType::Percentage),
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
    ("deadline", FieldType::Date),
    ("deliverable_finish", FieldType::Date),
    ("deliverable_guid", FieldType::Guid),
    ("deliverable_name", FieldType::String),
    ("deliverable_start", FieldType::Date),
    ("deliverable_type", FieldType::String),
    ("department", FieldType::String),
    ("duration", FieldType::Duration),
    ("duration1", FieldType::Duration),
    ("duration10", FieldType::Duration),
    ("duration10_estimated", FieldType::Boolean),
    ("duration10_units", FieldType::TimeUnits),
    ("duration1_estimated", FieldType::Boolean),
    ("duration1_units", FieldType::TimeUnits),
    ("duration2", FieldType::Duration),
    ("duration2_estimated", FieldType::Boolean),
    ("duration2_units", FieldType::TimeUnits),
    ("duration3", FieldType::Duration),
    ("duration3_estimated", FieldType::Boolean),
    ("duration3_units", FieldType::TimeUnits),
    ("duration4", FieldType::Duration),
    ("duration4_estimated", FieldType::Boolean),
    ("duration4_units", FieldType::TimeUnits),
    ("duration5", FieldType::Duration),
    ("duration5_estimated", FieldType::Boolean),
    ("duration5_units", FieldType::TimeUnits),
    ("duration6", FieldType::Duration),
    ("duration6_estimated", FieldType::Boolean),
    ("duration6_units", FieldType::TimeUnits),
    ("duration7", FieldType::Duration),
    ("duration7_estimated", FieldType::Boolean),
    ("duration7_units", FieldType::TimeUnits),
    ("duration8", FieldType::Duration),
    ("duration8_estimated", FieldType::Boolean),
    ("duration8_units", FieldType::TimeUnits),
    ("duration9", FieldType::Duration),
    ("duration9_estimated", FieldType::Boolean),
    ("duration9_units", FieldType::TimeUnits),
    ("duration_text", FieldType::String),
    ("duration_units", FieldType::TimeUnits),
    ("duration_variance", FieldType::Duration),
    ("eac", FieldType::Currency),
    ("early_finish", FieldType::Date),
    ("early_start", FieldType::Date),
    ("earned_value_method", FieldType::EarnedValueMethod),
    ("effort_driven", FieldType::Boolean),
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
    ("enterprise_outline_code30", FieldType::String),
    ("enterprise_outline_code4", FieldType::String),
    ("enterprise_outline_code5", FieldType::String),
    ("enterprise_outline_code6", FieldType::String),
    ("enterprise_outline_code7", FieldType::String),
    ("enterprise_outline_code8", FieldType::String),
    ("enterprise_outline_code9", FieldType::String),
    ("enterprise_project_cost1", FieldType::Currency),
    ("enterprise_project_cost10", FieldType::Currency),
    ("enterprise_project_cost2", FieldType::Currency),
    ("enterprise_project_cost3", FieldType::Currency),
    ("enterprise_project_cost4", FieldType::Currency),
    ("enterprise_project_cost5", FieldType::Currency),
    ("enterprise_project_cost6", FieldType::Currency),
    ("enterprise_project_cost7", FieldType::Currency),
    ("enterprise_project_cost8", FieldType::Currency),
    ("enterprise_project_cost9", FieldType::Currency),
    ("enterprise_project_date1", FieldType::Date),
    ("enterprise_project_date10", FieldType::Date),
    ("enterprise_project_date11", FieldType::Date),
    ("enterprise_project_date12", FieldType::Date),
    ("enterprise_project_date13", FieldType::Date),
    ("enterprise_project_date14", FieldType::Date),
    ("enterprise_project_date15", FieldType::Date),
    ("enterprise_project_date16", FieldType::Date),
    ("enterprise_project_date17", FieldType::Date),
    ("enterprise_project_date18", FieldType::Date),
    ("enterprise_project_date19", FieldType::Date),
    ("enterprise_project_date2", FieldType::Date),
    ("enterprise_project_date20", FieldType::Date),
    ("enterprise_project_date21", FieldType::Date),
    ("enterprise_project_date22", FieldType::Date),
    ("enterprise_project_date23", FieldType::Date),
    ("enterprise_project_date24", FieldType::Date),
    ("enterprise_project_date25", FieldType::Date),
    ("enterprise_project_date26", FieldType::Date),
    ("enterprise_project_date27", FieldType::Date),
    ("enterprise_project_date28", FieldType::Date),
    ("enterprise_project_date29", FieldType::Date),
    ("enterprise_project_date3", FieldType::Date),
    ("enterprise_project_date30", FieldType::Date),
    ("enterprise_project_date4", FieldType::Date),
    ("enterprise_project_date5", FieldType::Date),
    ("enterprise_project_date6", FieldType::Date),
    ("enterprise_project_date7", FieldType::Date),
    ("enterprise_project_date8", FieldType::Date),
    ("enterprise_project_date9", FieldType::Date),
    ("enterprise_project_duration1", FieldType::Duration),
    ("enterprise_project_duration10", FieldType::Duration),
    ("enterprise_project_duration2", FieldType::Duration),
    ("enterprise_project_duration3", FieldType::Duration),
    ("enterprise_project_duration4", FieldType::Duration),
    ("enterprise_project_duration5", FieldType::Duration),
    ("enterprise_project_duration6", FieldType::Duration),
    ("enterprise_project_duration7", FieldType::Duration),
    ("enterprise_project_duration8", FieldType::Duration),
    ("enterprise_project_duration9", FieldType::Duration),
    ("enterprise_project_flag1", FieldType::Boolean),
    ("enterprise_project_flag10", FieldType::Boolean),
    ("enterprise_project_flag11", FieldType::Boolean),
    ("enterprise_project_flag12", FieldType::Boolean),
    ("enterprise_project_flag13", FieldType::Boolean),
    ("enterprise_project_flag14", FieldType::Boolean),
    ("enterprise_project_flag15", FieldType::Boolean),
    ("enterprise_project_flag16", FieldType::Boolean),
    ("enterprise_project_flag17", FieldType::Boolean),
    ("enterprise_project_flag18", FieldType::Boolean),
    ("enterprise_project_flag19", FieldType::Boolean),
    ("enterprise_project_flag2", FieldType::Boolean),
    ("enterprise_project_flag20", FieldType::Boolean),
    ("enterprise_project_flag3", FieldType::Boolean),
    ("enterprise_project_flag4", FieldType::Boolean),
    ("enterprise_project_flag5", FieldType::Boolean),
    ("enterprise_project_flag6", FieldType::Boolean),
    ("enterprise_project_flag7", FieldType::Boolean),
    ("enterprise_project_flag8", FieldType::Boolean),
    ("enterprise_project_flag9", FieldType::Boolean),
    ("enterprise_project_number1", FieldType::Numeric),
    ("enterprise_project_number10", FieldType::Numeric),
    ("enterprise_project_number11", FieldType::Numeric),
    ("enterprise_project_number12", FieldType::Numeric),
    ("enterprise_project_number13", FieldType::Numeric),
    ("enterprise_project_number14", FieldType::Numeric),
    ("enterprise_project_number15", FieldType::Numeric),
    ("enterprise_project_number16", FieldType::Numeric),
    ("enterprise_project_number17", FieldType::Numeric),
    ("enterprise_project_number18", FieldType::Numeric),
    ("enterprise_project_number19", FieldType::Numeric),
    ("enterprise_project_number2", FieldType::Numeric),
    ("enterprise_project_number20", FieldType::Numeric),
    ("enterprise_project_number21", FieldType::Numeric),
    ("enterprise_project_number22", FieldType::Numeric),
    ("enterprise_project_number23", FieldType::Numeric),
    ("enterprise_project_number24", FieldType::Numeric),
    ("enterprise_project_number25", FieldType::Numeric),
    ("enterprise_project_number26", FieldType::Numeric),
    ("enterprise_project_number27", FieldType::Numeric),
    ("enterprise_project_number28", FieldType::Numeric),
    ("enterprise_project_number29", FieldType::Numeric),
    ("enterprise_project_number3", FieldType::Numeric),
    ("enterprise_project_number30", FieldType::Numeric),
    ("enterprise_project_number31", FieldType::Numeric),
    ("enterprise_project_number32", FieldType::Numeric),
    ("enterprise_project_number33", FieldType::Numeric),
    ("enterprise_project_number34", FieldType::Numeric),
    ("enterprise_project_number35", FieldType::Numeric),
    ("enterprise_project_number36", FieldType::Numeric),
    ("enterprise_project_number37", FieldType::Numeric),
    ("enterprise_project_number38", FieldType::Numeric),
    ("enterprise_project_number39", FieldType::Numeric),
    ("enterprise_project_number4", FieldType::Numeric),
    ("enterprise_project_number40", FieldType::Numeric),
    ("enterprise_project_number5", FieldType::Numeric),
    ("enterprise_project_number6", FieldType::Numeric),
    ("enterprise_project_number7", FieldType::Numeric),
    ("enterprise_project_number8", FieldType::Numeric),
    ("enterprise_project_number9", FieldType::Numeric),
    ("enterprise_project_outline_code1", FieldType::String),
    ("enterprise_project_outline_code10", FieldType::String),
    ("enterprise_project_outline_code11", FieldType::String),
    ("enterprise_project_outline_code12", FieldType::String),
    ("enterprise_project_outline_code13", FieldType::String),
    ("enterprise_project_outline_code14", FieldType::String),
    ("enterprise_project_outline_code15", FieldType::String),
    ("enterprise_project_outline_code16", FieldType::String),
    ("enterprise_project_outline_code17", FieldType::String),
    ("enterprise_project_outline_code18", FieldType::String),
    ("enterprise_project_outline_code19", FieldType::String),
    ("enterprise_project_outline_code2", FieldType::String),
    ("enterprise_project_outline_code20", FieldType::String),
    ("enterprise_project_outline_code21", FieldType::String),
    ("enterprise_project_outline_code22", FieldType::String),
    ("enterprise_project_outline_code23", FieldType::String),
    ("enterprise_project_outline_code24", FieldType::String),
    ("enterprise_project_outline_code25", FieldType::String),
    ("enterprise_project_outline_code26", FieldType::String),
    ("enterprise_project_outline_code27", FieldType::String),
    ("enterprise_project_outline_code28", FieldType::String),
    ("enterprise_project_outline_code29", FieldType::String),
    ("enterprise_project_outline_code3", FieldType::String),
    ("enterprise_project_outline_code30", FieldType::String),
    ("enterprise_project_outline_code4", FieldType::String),
    ("enterprise_project_outline_code5", FieldType::String),
    ("enterprise_project_outline_code6", FieldType::String),
    ("enterprise_project_outline_code7", FieldType::String),
    ("enterprise_project_outline_code8", FieldType::String),
    ("enterprise_project_outline_code9", FieldType::String),
    ("enterprise_project_text1", FieldType::String),
    ("enterprise_project_text10", FieldType::String),
    ("enterprise_project_text11", FieldType::String),
    ("enterprise_project_text12", FieldType::String),
    ("enterprise_project_text13", FieldType::String),
    ("enterprise_project_text14", FieldType::String),
    ("enterprise_project_text15", FieldType::String),
    ("enterprise_project_text16", FieldType::String),
    ("enterprise_project_text17", FieldType::String),
    ("enterprise_project_text18", FieldType::String),
    ("enterprise_project_text19", FieldType::String),
    ("enterprise_project_text2", FieldType::String),
    ("enterprise_project_text20", FieldType::String),
    ("enterprise_project_text21", FieldType::String),
    ("enterprise_project_text22", FieldType::String),
    ("enterprise_project_text23", FieldType::String),
    ("enterprise_project_text24", FieldType::String),
    ("enterprise_project_text25", FieldType::String),
    ("enterprise_project_text26", FieldType::String),
    ("enterprise_project_text27", FieldType::String),
    ("enterprise_project_text28", FieldType::String),
    ("enterprise_project_text29", FieldType::String),
    ("enterprise_project_text3", FieldType::String),
    ("enterprise_project_text30", FieldType::String),
    ("enterprise_project_text31", FieldType::String),
    ("enterprise_project_text32", FieldType::String),
    ("enterprise_project_text33", FieldType::String),
    ("enterprise_project_text34", FieldType::String),
    ("enterprise_project_text35", FieldType::String),
    ("enterprise_project_text36", FieldType::String),
    ("enterprise_project_text37", FieldType::String),
    ("enterprise_project_text38", FieldType::String),
    ("enterprise_project_text39", FieldType::String),
    ("enterprise_project_text4", FieldType::String),
    ("enterprise_project_text40", FieldType::String),
    ("enterprise_project_text5", FieldType::String),
    ("enterprise_project_text6", FieldType::String),
    ("enterprise_project_text7", FieldType::String),
    ("enterprise_project_text8", FieldType::String),
    ("enterprise_project_text9", FieldType::String),
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
    ("error_message", FieldType::String),
    ("estimated", FieldType::Boolean),
    ("expanded", FieldType::Boolean),
    ("expected_finish", FieldType::Date),
    ("expense_items", FieldType::ExpenseItemList),
    ("external_early_start", FieldType::Date),
    ("external_late_finish", FieldType::Date),
    ("external_project", FieldType::Boolean),
    ("external_task", FieldType::Boolean),
    ("feature_of_work", FieldType::String),
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
    ("finish_slack", FieldType::Duration),
    ("finish_text", FieldType::String),
    ("finish_variance", FieldType::Duration),
    ("fixed_cost", FieldType::Currency),
    ("fixed_cost_accrual", FieldType::Accrue),
    ("fixed_duration", FieldType::Boolean),
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
    ("float_path", FieldType::Integer),
    ("float_path_order", FieldType::Integer),
    ("free_slack", FieldType::Duration),
    ("group_by_summary", FieldType::String),
    ("guid", FieldType::Guid),
    ("hammock_code", FieldType::Boolean),
    ("hide_bar", FieldType::Boolean),
    ("hyperlink", FieldType::String),
    ("hyperlink_address", FieldType::String),
    ("hyperlink_data", FieldType::Binary),
    ("hyperlink_href", FieldType::String),
    ("hyperlink_screen_tip", FieldType::String),
    ("hyperlink_subaddress", FieldType::String),
    ("id", FieldType::Integer),
    ("ignore_resource_calendar", FieldType::Boolean),
    ("ignore_warnings", FieldType::Boolean),
    ("index", FieldType::Integer),
    ("indicators", FieldType::String),
    ("is_duration_valid", FieldType::Boolean),
    ("is_finish_valid", FieldType::Boolean),
    ("is_start_valid", FieldType::Boolean),
    ("late_finish", FieldType::Date),
    ("late_start", FieldType::Date),
    ("level_assignments", FieldType::Boolean),
    ("leveling_can_split", FieldType::Boolean),
    ("leveling_delay", FieldType::Duration),
    ("leveling_delay_units", FieldType::TimeUnits),
    ("linked_fields", FieldType::Boolean),
    ("location_unique_id", FieldType::Integer),
    ("longest_path", FieldType::Boolean),
    ("mail", FieldType::String),
    ("manager", FieldType::String),
    ("manual_duration", FieldType::Duration),
    ("manual_duration_units", FieldType::TimeUnits),
    ("marked", FieldType::Boolean),
    ("methodology_guid", FieldType::Guid),
    ("milestone", FieldType::Boolean),
    ("mod_or_claim_number", FieldType::String),
    ("name", FieldType::String),
    ("notes", FieldType::Notes),
    ("null", FieldType::Boolean),
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
    ("outline_level", FieldType::Short),
    ("outline_number", FieldType::String),
    ("overall_percent_complete", FieldType::Percentage),
    ("overallocated", FieldType::Boolean),
    ("overtime_cost", FieldType::Currency),
    ("overtime_work", FieldType::Duration),
    ("parent_task_unique_id", FieldType::Integer),
    ("path_driven_successor", FieldType::Boolean),
    ("path_driving_predecessor", FieldType::Boolean),
    ("path_predecessor", FieldType::Boolean),
    ("path_successor", FieldType::Boolean),
    ("peak", FieldType::Units),
    ("percent_complete", FieldType::Percentage),
    ("percent_complete_type", FieldType::PercentCompleteType),
    ("percent_work_complete", FieldType::Percentage),
    ("phase_of_work", FieldType::String),
    ("physical_percent_complete", FieldType::Percentage),
    ("placeholder", FieldType::Boolean),
    ("planned_cost", FieldType::Currency),
    ("planned_duration", FieldType::Duration),
    ("planned_finish", FieldType::Date),
    ("planned_start", FieldType::Date),
    ("planned_work", FieldType::Work),
    ("planned_work_labor", FieldType::Duration),
    ("planned_work_nonlabor", FieldType::Duration),
    ("predecessors", FieldType::RelationList),
    ("preleveled_finish", FieldType::Date),
    ("preleveled_start", FieldType::Date),
    ("primary_resource_unique_id", FieldType::Integer),
    ("priority", FieldType::Priority),
    ("project", FieldType::String),
    ("publish", FieldType::Boolean),
    ("recalc_outline_codes", FieldType::Boolean),
    ("recurring", FieldType::Boolean),
    ("recurring_data", FieldType::Binary),
    ("regular_work", FieldType::Duration),
    ("remaining_cost", FieldType::Currency),
    ("remaining_duration", FieldType::Duration),
    ("remaining_early_finish", FieldType::Date),
    ("remaining_early_start", FieldType::Date),
    ("remaining_late_finish", FieldType::Date),
    ("remaining_late_start", FieldType::Date),
    ("remaining_overtime_cost", FieldType::Currency),
    ("remaining_overtime_work", FieldType::Work),
    ("remaining_work", FieldType::Work),
    ("remaining_work_labor", FieldType::Duration),
    ("remaining_work_nonlabor", FieldType::Duration),
    ("request_demand", FieldType::String),
    ("resource_enterprise_multi_value_code20", FieldType::String),
    ("resource_enterprise_multi_value_code21", FieldType::String),
    ("resource_enterprise_multi_value_code22", FieldType::String),
    ("resource_enterprise_multi_value_code23", FieldType::String),
    ("resource_enterprise_multi_value_code24", FieldType::String),
    ("resource_enterprise_multi_value_code25", FieldType::String),
    ("resource_enterprise_multi_value_code26", FieldType::String),
    ("resource_enterprise_multi_value_code27", FieldType::String),
    ("resource_enterprise_multi_value_code28", FieldType::String),
    ("resource_enterprise_multi_value_code29", FieldType::String),
    ("resource_enterprise_outline_code1", FieldType::String),
    ("resource_enterprise_outline_code10", FieldType::String),
    ("resource_enterprise_outline_code11", FieldType::String),
    ("resource_enterprise_outline_code12", FieldType::String),
    ("resource_enterprise_outline_code13", FieldType::String),
    ("resource_enterprise_outline_code14", FieldType::String),
    ("resource_enterprise_outline_code15", FieldType::String),
    ("resource_enterprise_outline_code16", FieldType::String),
    ("resource_enterprise_outline_code17", FieldType::String),
    ("resource_enterprise_outline_code18", FieldType::String),
    ("resource_enterprise_outline_code19", FieldType::String),
    ("resource_enterprise_outline_code2", FieldType::String),
    ("resource_enterprise_outline_code20", FieldType::String),
    ("resource_enterprise_outline_code21", FieldType::String),
    ("resource_enterprise_outline_code22", FieldType::String),
    ("resource_enterprise_outline_code23", FieldType::String),
    ("resource_enterprise_outline_code24", FieldType::String),
    ("resource_enterprise_outline_code25", FieldType::String),
    ("resource_enterprise_outline_code26", FieldType::String),
    ("resource_enterprise_outline_code27", FieldType::String),
    ("resource_enterprise_outline_code28", FieldType::String),
    ("resource_enterprise_outline_code29", FieldType::String),
    ("resource_enterprise_outline_code3", FieldType::String),
    ("resource_enterprise_outline_code4", FieldType::String),
    ("resource_enterprise_outline_code5", FieldType::String),
    ("resource_enterprise_outline_code6", FieldType::String),
    ("resource_enterprise_outline_code7", FieldType::String),
    ("resource_enterprise_outline_code8", FieldType::String),
    ("resource_enterprise_outline_code9", FieldType::String),
    ("resource_enterprise_rbs", FieldType::String),
    ("resource_group", FieldType::String),
    ("resource_initials", FieldType::String),
    ("resource_names", FieldType::String),
    ("resource_phonetics", FieldType::String),
    ("resource_type", FieldType::String),
    ("response_pending", FieldType::Boolean),
    ("responsibility_code", FieldType::String),
    ("resume", FieldType::Date),
    ("resume_no_earlier_than", FieldType::Date),
    ("resume_valid", FieldType::Boolean),
    ("rollup", FieldType::Boolean),
    ("scheduled_duration", FieldType::Duration),
    ("scheduled_finish", FieldType::Date),
    ("scheduled_start", FieldType::Date),
    ("secondary_constraint_date", FieldType::Date),
    ("secondary_constraint_type", FieldType::Constraint),
    ("section", FieldType::String),
    ("sequence_number", FieldType::Integer),
    ("show_duration_text", FieldType::Boolean),
    ("show_finish_text", FieldType::Boolean),
    ("show_on_board", FieldType::String),
    ("show_start_text", FieldType::Boolean),
    ("spi", FieldType::Numeric),
    ("splits", FieldType::DateRangeList),
    ("sprint", FieldType::String),
    ("sprint_finish", FieldType::Date),
    ("sprint_id", FieldType::Integer),
    ("sprint_start", FieldType::Date),
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
    ("start_slack", FieldType::Duration),
    ("start_text", FieldType::String),
    ("start_variance", FieldType::Duration),
    ("status", FieldType::String),
    ("status_indicator", FieldType::String),
    ("status_manager", FieldType::String),
    ("steps", FieldType::StepList),
    ("stop", FieldType::Date),
    ("stored_material", FieldType::Currency),
    ("subproject_file", FieldType::String),
    ("subproject_guid", FieldType::Guid),
    ("subproject_read_only", FieldType::Boolean),
    ("subproject_task_id", FieldType::Integer),
    ("subproject_task_unique_id", FieldType::Integer),
    ("subproject_tasks_uniqueid_offset", FieldType::Integer),
    ("successors", FieldType::RelationList),
    ("summary", FieldType::Boolean),
    ("summary_progress", FieldType::Date),
    ("suspend_date", FieldType::Date),
    ("sv", FieldType::Currency),
    ("svpercent", FieldType::Percentage),
    ("task_calendar", FieldType::String),
    ("task_calendar_guid", FieldType::Guid),
    ("task_mode", FieldType::TaskMode),
    ("task_summary_name", FieldType::String),
    ("tcpi", FieldType::Numeric),
    ("teamstatus_pending", FieldType::Boolean),
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
    ("total_slack", FieldType::Duration),
    ("type", FieldType::TaskType),
    ("unavailable", FieldType::String),
    ("unique_id", FieldType::Integer),
    ("unique_id_predecessors", FieldType::String),
    ("unique_id_successors", FieldType::String),
    ("update_needed", FieldType::Boolean),
    ("vac", FieldType::Currency),
    ("warning", FieldType::Boolean),
    ("wbs", FieldType::String),
    ("wbs_predecessors", FieldType::RelationList),
    ("wbs_successors", FieldType::RelationList),
    ("work", FieldType::Work),
    ("work_area_code", FieldType::String),
    ("work_contour", FieldType::WorkContour),
    ("work_variance", FieldType::Duration),
    ("workers_per_day", FieldType::Integer),
];
