use crate::app::StudentApp;
use crate::ui::theme;
use egui::{Context, RichText, Window};

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut StudentApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size(theme::ABOUT_DIALOG_SIZE)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Student Management System").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(10.0);
                ui.label("Students are saved to:");
                ui.label(RichText::new(app.data_file_path().display().to_string()).small());
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
