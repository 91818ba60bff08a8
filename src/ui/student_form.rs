use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use student_manager::{Student, StudentValidationError};

use crate::ui::theme;

/// Buttons the entry form can report.
pub enum FormAction {
    None,
    Add,
    Update,
    Delete,
    Clear,
}

/// Raw text of the entry fields plus the last validation message.
#[derive(Debug, Default)]
pub struct StudentForm {
    pub id: String,
    pub name: String,
    pub marks: String,
    pub error: Option<String>,
}

impl StudentForm {
    pub fn fill_from(&mut self, student: &Student) {
        self.id = student.id.to_string();
        self.name = student.name.clone();
        self.marks = student.marks.to_string();
        self.error = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse the fields into a validated student, or the message to show.
    pub fn to_student(&self) -> Result<Student, String> {
        // Unparseable ids fall into the same rule as non-positive ones.
        let id = self.id.trim().parse::<i32>().unwrap_or(0);
        let marks_text = self.marks.trim();
        let marks = marks_text.parse::<f64>().ok();
        let student = Student::new(id, self.name.trim(), marks.unwrap_or(f64::NAN));
        match student.validate() {
            Ok(()) => Ok(student),
            Err(StudentValidationError::MarksOutOfRange)
                if marks.is_none() && !marks_text.is_empty() =>
            {
                Err("Marks must be a number.".to_string())
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Render the left-side entry form.
pub fn show_student_form(form: &mut StudentForm, has_selection: bool, ui: &mut Ui) -> FormAction {
    let mut action = FormAction::None;

    ui.add_space(6.0);
    ui.label(
        RichText::new(if has_selection { "Edit Student" } else { "New Student" })
            .strong()
            .size(15.0),
    );
    ui.add_space(6.0);

    egui::Grid::new("student_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("ID");
            ui.add_sized(
                [160.0, 24.0],
                egui::TextEdit::singleline(&mut form.id).hint_text("e.g. 1"),
            );
            ui.end_row();

            ui.label("Name");
            ui.add_sized(
                [160.0, 24.0],
                egui::TextEdit::singleline(&mut form.name).hint_text("Student name..."),
            );
            ui.end_row();

            ui.label("Marks");
            ui.add_sized(
                [160.0, 24.0],
                egui::TextEdit::singleline(&mut form.marks).hint_text("0 - 100"),
            );
            ui.end_row();
        });

    ui.add_space(6.0);
    if let Some(error) = &form.error {
        ui.label(
            RichText::new(format!("{} {}", icons::WARNING_CIRCLE, error))
                .color(theme::ERROR)
                .size(12.0),
        );
        ui.add_space(4.0);
    }
    ui.separator();
    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui| {
        let add_btn = egui::Button::new(
            RichText::new(format!("{} Add", icons::PLUS)).color(Color32::WHITE),
        )
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(4.0));
        if ui.add_sized(theme::BUTTON_SIZE, add_btn).clicked() {
            action = FormAction::Add;
        }

        let update_btn = egui::Button::new(format!("{} Update", icons::PENCIL_SIMPLE));
        if ui
            .add_enabled(has_selection, update_btn)
            .on_disabled_hover_text("Select a student in the list first")
            .clicked()
        {
            action = FormAction::Update;
        }

        let delete_btn = egui::Button::new(format!("{} Delete", icons::TRASH));
        if ui
            .add_enabled(has_selection, delete_btn)
            .on_disabled_hover_text("Select a student in the list first")
            .clicked()
        {
            action = FormAction::Delete;
        }

        if ui.button(format!("{} Clear", icons::ERASER)).clicked() {
            action = FormAction::Clear;
        }
    });

    // Enter submits: update when editing, add otherwise
    if ui.input(|i| i.key_pressed(egui::Key::Enter)) && matches!(action, FormAction::None) {
        action = if has_selection {
            FormAction::Update
        } else {
            FormAction::Add
        };
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, name: &str, marks: &str) -> StudentForm {
        StudentForm {
            id: id.into(),
            name: name.into(),
            marks: marks.into(),
            error: None,
        }
    }

    #[test]
    fn parses_and_trims_fields() {
        let student = form(" 7 ", "  Alice ", "85.5").to_student().expect("valid form");
        assert!(student.same_snapshot(&Student::new(7, "Alice", 85.5)));
    }

    #[test]
    fn non_numeric_id_reports_id_rule() {
        let err = form("abc", "Alice", "50").to_student().unwrap_err();
        assert_eq!(err, "ID must be a positive number.");
    }

    #[test]
    fn id_rule_wins_over_unparseable_marks() {
        let err = form("0", "Alice", "lots").to_student().unwrap_err();
        assert_eq!(err, "ID must be a positive number.");
    }

    #[test]
    fn empty_marks_report_range_rule_and_garbage_reports_number() {
        assert_eq!(
            form("1", "Alice", "").to_student().unwrap_err(),
            "Marks must be between 0 and 100."
        );
        assert_eq!(form("1", "Alice", "lots").to_student().unwrap_err(), "Marks must be a number.");
    }
}
