pub mod dialogs;
pub mod student_form;
pub mod student_table;
pub mod theme;
pub mod toolbar;
