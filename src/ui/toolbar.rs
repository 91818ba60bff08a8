use crate::app::StudentApp;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut StudentApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").size(13.0), |ui| {
            if ui.button(format!("{}  Reload          F5", icons::ARROWS_CLOCKWISE)).clicked() {
                app.reload();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Import CSV...", icons::DOWNLOAD_SIMPLE)).clicked() {
                app.import_csv();
                ui.close_menu();
            }
            if ui.button(format!("{}  Export CSV...", icons::UPLOAD_SIMPLE)).clicked() {
                app.export_csv();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Clear All...", icons::TRASH)).clicked() {
                app.clear_all();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Open Data Folder", icons::FOLDER_OPEN)).clicked() {
                app.open_data_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").size(13.0), |ui| {
            let mut dark = app.settings.dark_mode;
            if ui.checkbox(&mut dark, "Dark mode").changed() {
                app.set_dark_mode(dark);
                ui.close_menu();
            }
            let mut confirm = app.settings.confirm_delete;
            if ui.checkbox(&mut confirm, "Confirm before delete").changed() {
                app.set_confirm_delete(confirm);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").size(13.0), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });
    });
}
