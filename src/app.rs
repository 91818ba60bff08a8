use std::path::{Path, PathBuf};

use student_manager::{AppSettings, Roster, Student, StudentStore};
use tracing::{debug, error};

use crate::ui;
use crate::ui::student_form::{FormAction, StudentForm};
use crate::ui::student_table::TableAction;

/// Main application state.
pub struct StudentApp {
    store: Box<dyn StudentStore>,
    pub roster: Roster,
    pub selected: Option<i32>,
    pub form: StudentForm,

    /// Set when the data file exists but could not be read; saving would
    /// clobber it, so mutations are refused until a reload succeeds.
    pub persist_blocked: bool,

    pub settings: AppSettings,
    settings_path: PathBuf,

    // Dialog state
    pub show_about: bool,

    // Status message
    pub status_message: String,
}

impl StudentApp {
    pub fn new(cc: &eframe::CreationContext<'_>, store: Box<dyn StudentStore>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_path = AppSettings::default_path();
        let settings = AppSettings::load(&settings_path);

        let mut app = Self {
            store,
            roster: Roster::new(),
            selected: None,
            form: StudentForm::default(),
            persist_blocked: false,
            settings,
            settings_path,
            show_about: false,
            status_message: "Ready".to_string(),
        };
        app.reload();
        app
    }

    pub fn data_file_path(&self) -> PathBuf {
        self.store.data_file_path().to_path_buf()
    }

    // --- File operations ---

    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(students) => {
                self.roster = Roster::from_students(students);
                self.persist_blocked = false;
                self.selected = None;
                self.form.clear();
                self.form.id = self.roster.next_free_id().to_string();
                self.status_message = format!("Loaded {} students", self.roster.len());
            }
            Err(e) => {
                error!(error = %e, "could not load student list");
                self.roster = Roster::new();
                self.persist_blocked = true;
                self.status_message = format!("Error loading: {}", e);
            }
        }
    }

    /// Save `next` and adopt it as the current roster only if the write succeeds.
    fn commit(&mut self, next: Roster, message: String) -> bool {
        if self.persist_blocked {
            self.status_message =
                "Saving is disabled because the data file could not be read. Use File → Reload."
                    .to_string();
            return false;
        }
        match self.store.save(next.students()) {
            Ok(()) => {
                self.roster = next;
                self.status_message = message;
                true
            }
            Err(e) => {
                self.status_message = format!("Error saving: {}", e);
                false
            }
        }
    }

    pub fn import_csv(&mut self) {
        if !self.roster.is_empty() {
            let confirm = rfd::MessageDialog::new()
                .set_title("Import CSV")
                .set_description("This will replace the current student list. Continue?")
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();
            if confirm != rfd::MessageDialogResult::Yes {
                return;
            }
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        else {
            return;
        };

        match student_manager::io::csv_import::import_csv(&path) {
            Ok((students, skipped)) => {
                // Later rows lose to earlier ones with the same id.
                let mut next = Roster::new();
                let mut duplicates = 0;
                for student in students {
                    if next.add(student).is_err() {
                        duplicates += 1;
                    }
                }
                let count = next.len();
                let skipped = skipped + duplicates;
                let message = if skipped > 0 {
                    format!("Imported {} students ({} rows skipped)", count, skipped)
                } else {
                    format!("Imported {} students", count)
                };
                if self.commit(next, message) {
                    self.selected = None;
                    self.form.clear();
                    self.form.id = self.roster.next_free_id().to_string();
                }
            }
            Err(e) => {
                self.status_message = format!("CSV import failed: {}", e);
            }
        }
    }

    pub fn export_csv(&mut self) {
        if self.roster.is_empty() {
            self.status_message = "Nothing to export: the list is empty".to_string();
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("students.csv")
            .save_file()
        {
            match student_manager::io::csv_export::export_csv(self.roster.students(), &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} students to CSV", count);
                }
                Err(e) => {
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    pub fn open_data_folder(&mut self) {
        let dir = self.store.data_dir().to_path_buf();
        if let Err(e) = std::fs::create_dir_all(&dir).and_then(|()| open::that(&dir)) {
            self.status_message = format!("Could not open {}: {}", dir.display(), e);
        }
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.settings.dark_mode = dark;
        self.settings.save(&self.settings_path);
    }

    pub fn set_confirm_delete(&mut self, confirm: bool) {
        self.settings.confirm_delete = confirm;
        self.settings.save(&self.settings_path);
    }

    // --- Student operations ---

    pub fn select(&mut self, id: i32) {
        if let Some(student) = self.roster.find(id) {
            self.form.fill_from(student);
            self.selected = Some(id);
        }
    }

    pub fn add_student(&mut self) {
        let Some(student) = self.form_student() else {
            return;
        };
        let mut next = self.roster.clone();
        if let Err(e) = next.add(student.clone()) {
            self.form.error = Some(e.to_string());
            return;
        }
        debug!(id = student.id, "adding student");
        if self.commit(next, format!("Added {}", student)) {
            self.form.clear();
            self.form.id = self.roster.next_free_id().to_string();
            self.selected = None;
        }
    }

    pub fn update_student(&mut self) {
        let Some(original_id) = self.selected else {
            self.form.error = Some("Select a student to update.".to_string());
            return;
        };
        let Some(student) = self.form_student() else {
            return;
        };
        if self
            .roster
            .find(original_id)
            .is_some_and(|current| current.same_snapshot(&student))
        {
            self.status_message = "Nothing changed".to_string();
            return;
        }
        let mut next = self.roster.clone();
        if let Err(e) = next.update(original_id, student.clone()) {
            self.form.error = Some(e.to_string());
            return;
        }
        debug!(from = original_id, to = student.id, "updating student");
        if self.commit(next, format!("Updated {}", student)) {
            self.selected = Some(student.id);
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected else {
            self.form.error = Some("Select a student to delete.".to_string());
            return;
        };
        let Some(student) = self.roster.find(id).cloned() else {
            self.selected = None;
            return;
        };

        if self.settings.confirm_delete {
            let confirm = rfd::MessageDialog::new()
                .set_title("Delete Student")
                .set_description(format!("Delete '{}'?", student.name))
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();
            if confirm != rfd::MessageDialogResult::Yes {
                return;
            }
        }

        let mut next = self.roster.clone();
        next.remove(id);
        debug!(id, "deleting student");
        if self.commit(next, format!("Deleted {}", student)) {
            self.selected = None;
            self.form.clear();
            self.form.id = self.roster.next_free_id().to_string();
        }
    }

    /// Remove every student, after confirmation.
    pub fn clear_all(&mut self) {
        if self.roster.is_empty() {
            self.status_message = "Nothing to clear: the list is empty".to_string();
            return;
        }

        let confirm = rfd::MessageDialog::new()
            .set_title("Clear All")
            .set_description(format!(
                "Delete all {} students? This cannot be undone.",
                self.roster.len()
            ))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        if confirm != rfd::MessageDialogResult::Yes {
            return;
        }

        let mut next = self.roster.clone();
        next.clear();
        debug!(count = self.roster.len(), "clearing all students");
        if self.commit(next, "All students deleted".to_string()) {
            self.clear_form();
        }
    }

    pub fn clear_form(&mut self) {
        self.selected = None;
        self.form.clear();
        self.form.id = self.roster.next_free_id().to_string();
    }

    /// Parse and validate the form, leaving the reason on the form when it fails.
    fn form_student(&mut self) -> Option<Student> {
        match self.form.to_student() {
            Ok(student) => {
                self.form.error = None;
                Some(student)
            }
            Err(message) => {
                self.form.error = Some(message);
                None
            }
        }
    }
}

impl eframe::App for StudentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx, self.settings.dark_mode);

        let should_reload = ctx.input(|i| i.key_pressed(egui::Key::F5));
        if should_reload {
            self.reload();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let color = if self.persist_blocked {
                        ui::theme::ERROR
                    } else {
                        ui.visuals().weak_text_color()
                    };
                    ui.label(egui::RichText::new(&self.status_message).size(11.5).color(color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(status_summary(
                                &self.roster,
                                self.store.data_file_path(),
                            ))
                            .size(10.5)
                            .weak(),
                        );
                    });
                });
            });

        // Left panel: entry form
        let mut form_action = FormAction::None;
        egui::SidePanel::left("form_panel")
            .default_width(ui::theme::SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                form_action = ui::student_form::show_student_form(
                    &mut self.form,
                    self.selected.is_some(),
                    ui,
                );
            });

        match form_action {
            FormAction::Add => self.add_student(),
            FormAction::Update => self.update_student(),
            FormAction::Delete => self.delete_selected(),
            FormAction::Clear => self.clear_form(),
            FormAction::None => {}
        }

        // Central panel: student list
        let mut table_action = TableAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            table_action =
                ui::student_table::show_student_table(self.roster.students(), self.selected, ui);
        });

        if let TableAction::Select(id) = table_action {
            self.select(id);
        }

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

/// Right-hand status bar text: count, average marks and where the list is saved.
fn status_summary(roster: &Roster, data_file: &Path) -> String {
    let average = roster
        .average_marks()
        .map_or_else(|| "-".to_string(), |avg| format!("{:.1}", avg));
    format!(
        "Students: {}  ·  Average: {}  ·  {}",
        roster.len(),
        average,
        data_file.display()
    )
}
