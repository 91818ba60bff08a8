use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use student_manager::Student;

use crate::ui::theme;

/// Actions that the student table can request.
pub enum TableAction {
    None,
    Select(i32),
}

/// Render the student list.
pub fn show_student_table(students: &[Student], selected: Option<i32>, ui: &mut Ui) -> TableAction {
    let mut action = TableAction::None;

    // Header area
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Students").strong().size(15.0));
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", students.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    if students.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("No students yet. Fill in the form and press Add.")
                    .color(theme::TEXT_DIM),
            );
        });
        return action;
    }

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(70.0))
        .column(Column::remainder().at_least(140.0).clip(true))
        .column(Column::exact(80.0))
        .header(theme::ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("ID");
            });
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Marks");
            });
        })
        .body(|mut body| {
            for student in students {
                body.row(theme::ROW_HEIGHT, |mut row| {
                    row.set_selected(selected == Some(student.id));
                    row.col(|ui| {
                        ui.label(student.id.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&student.name);
                    });
                    row.col(|ui| {
                        ui.label(student.marks.to_string());
                    });
                    if row.response().clicked() {
                        action = TableAction::Select(student.id);
                    }
                });
            }
        });

    action
}
