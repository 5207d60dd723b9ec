// ui.rs - Window layout and the eframe::App glue around RandomBook

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use eframe::egui;
use egui::{Align2, Color32, FontId, RichText};

use crate::book::RandomBook;
use crate::config::FormInput;
use crate::error::{BookError, Result};
use crate::save;

const FIELD_WIDTH: f32 = 56.0;
const EXTRA_WIDTH: f32 = 280.0;
const BOOK_FONT_SIZE: f32 = 16.0;

/// A dialog waiting to be acknowledged. While one is open the rest of the
/// window is disabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    fn info(title: &str, message: String) -> Self {
        Self {
            title: title.to_string(),
            message,
            is_error: false,
        }
    }

    fn error(err: &BookError) -> Self {
        let message = match err {
            BookError::Save { .. } | BookError::NoHomeDirectory => {
                format!("Could not save the file:\n{err}")
            }
            _ => err.to_string(),
        };
        Self {
            title: err.title().to_string(),
            message,
            is_error: true,
        }
    }
}

pub struct BookApp {
    pub book: RandomBook,
    pub form: FormInput,
    pub notice: Option<Notice>,
}

impl Default for BookApp {
    fn default() -> Self {
        Self::new(RandomBook::from_os_rng())
    }
}

impl BookApp {
    pub fn new(book: RandomBook) -> Self {
        Self {
            book,
            form: FormInput::default(),
            notice: None,
        }
    }

    pub fn on_start(&mut self, now: Instant) {
        if let Err(err) = self.book.start(&self.form, now) {
            self.notice = Some(Notice::error(&err));
        }
    }

    pub fn on_stop(&mut self) {
        self.book.stop();
    }

    pub fn on_generate(&mut self) {
        if let Err(err) = self.book.generate_once(&self.form) {
            self.notice = Some(Notice::error(&err));
        }
    }

    pub fn on_save(&mut self) {
        match save::desktop_dir() {
            Ok(dir) => self.save_into(&dir),
            Err(err) => self.report_save(Err(err)),
        }
    }

    pub fn save_into(&mut self, dir: &Path) {
        let result = save::save_text(dir, self.book.text(), &Local::now());
        self.report_save(result);
    }

    fn report_save(&mut self, result: Result<PathBuf>) {
        self.notice = Some(match result {
            Ok(path) => Notice::info("Saved", format!("Book saved:\n{}", path.display())),
            Err(err) => Notice::error(&err),
        });
    }

    fn status_line(&self) -> String {
        let grid = self.book.grid();
        let state = if self.book.is_running() { "Running" } else { "Stopped" };
        format!(
            "{state} | {}×{} | alphabet: {} chars | ticks: {}",
            grid.rows(),
            grid.cols(),
            self.book.alphabet().len(),
            self.book.ticks()
        )
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut acknowledged = false;
        let colour = if notice.is_error { Color32::LIGHT_RED } else { Color32::LIGHT_GREEN };
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(notice.message.as_str()).color(colour));
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if acknowledged {
            self.notice = None;
        }
    }
}

impl eframe::App for BookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fire the tick first so this frame shows the fresh text
        self.book.poll(Instant::now(), &self.form);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_enabled(self.notice.is_none());
            ui.heading("Random book generator");

            // Parameters
            ui.horizontal(|ui| {
                ui.label("Rows:");
                ui.add(egui::TextEdit::singleline(&mut self.form.rows).desired_width(FIELD_WIDTH));
                ui.label("Cols:");
                ui.add(egui::TextEdit::singleline(&mut self.form.cols).desired_width(FIELD_WIDTH));
                ui.label("Interval (s):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.interval).desired_width(FIELD_WIDTH),
                );
            });

            ui.horizontal(|ui| {
                ui.label("Extra characters (include space or ; if wanted):");
                ui.add(egui::TextEdit::singleline(&mut self.form.extra).desired_width(EXTRA_WIDTH));
            });

            ui.separator();

            // Controls
            let running = self.book.is_running();
            ui.horizontal(|ui| {
                if ui.add_enabled(!running, egui::Button::new("▶ Start")).clicked() {
                    self.on_start(Instant::now());
                }

                if ui.add_enabled(running, egui::Button::new("⏹ Stop")).clicked() {
                    self.on_stop();
                }

                if ui.add_enabled(!running, egui::Button::new("🎲 Generate now")).clicked() {
                    self.on_generate();
                }

                if ui.button("💾 Save to desktop").clicked() {
                    self.on_save();
                }
            });

            ui.label(self.status_line());

            ui.separator();

            // The book itself, read-only
            let mut text = self.book.text();
            egui::ScrollArea::both().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .font(FontId::monospace(BOOK_FONT_SIZE))
                        .desired_width(f32::INFINITY),
                );
            });
        });

        self.show_notice(ctx);

        // Wake up again when the next tick is due
        if let Some(due) = self.book.deadline() {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.book.stop();
    }
}
