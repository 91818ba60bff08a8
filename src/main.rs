#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use student_manager::{logging, StudentRepository};

fn main() -> eframe::Result<()> {
    logging::init_logging();

    let repository = StudentRepository::new();
    tracing::info!(path = %repository.data_file_path().display(), "starting student manager");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Student Management System"),
        ..Default::default()
    };

    eframe::run_native(
        "Student Management System",
        options,
        Box::new(|cc| Ok(Box::new(app::StudentApp::new(cc, Box::new(repository))))),
    )
}
