mod compare_renamed_submissions_as_json;
mod compare_with_random_identifier_names;
mod compare_with_template_dims_nothing_when_piped;
mod filter_rows_by_kind;
mod invalid_filter_is_rejected;
mod missing_submission_is_rejected;
mod policy_file_overrides_mode;
mod show_left_only_row_for_extra_trailing_line;
mod show_summary_for_smart_and_strict_modes;
