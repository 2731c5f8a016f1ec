pub mod budget_panel;
pub mod cost_editor;
pub mod cost_form;
pub mod cost_list;
pub mod header;
pub mod import_previous;
pub mod month_picker;
pub mod totals;
pub mod upload_button;
