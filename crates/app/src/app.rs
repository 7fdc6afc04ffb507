use crate::dialog::ErrorDialogState;
use crate::surface::EguiSurface;
use eframe::egui;
use pdf_engine::{PdfEngineError, PdfiumRasterizer, Rasterizer};
use viewer_core::{route, ColorMode, DisplaySurface, InputEvent, ViewerError, ViewportController};

type Controller = ViewportController<PdfiumRasterizer, EguiSurface>;

/// Toolbar order of the color mode buttons.
const MODE_BUTTONS: [ColorMode; 3] = [ColorMode::Night, ColorMode::EyeComfort, ColorMode::Default];

const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x3c, 0x6e, 0xae);

pub struct ReaderApp {
    controller: Controller,

    // Text of the page-number field
    page_entry: String,

    // Last central panel size, for fit and resize detection
    last_viewport_size: egui::Vec2,

    error_dialog: Option<ErrorDialogState>,
}

impl ReaderApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, PdfEngineError> {
        let rasterizer = PdfiumRasterizer::new()?;
        let surface = EguiSurface::new(cc.egui_ctx.clone());

        Ok(Self {
            controller: ViewportController::new(rasterizer, surface),
            page_entry: String::new(),
            last_viewport_size: egui::Vec2::ZERO,
            error_dialog: None,
        })
    }

    fn handle(&mut self, event: InputEvent) {
        if let Some(err) = apply_event(&mut self.controller, &mut self.page_entry, event) {
            self.show_error(&err);
        }
    }

    fn show_error(&mut self, err: &ViewerError) {
        self.error_dialog = Some(ErrorDialogState::from_error(err));
    }

    /// Keeps rendering in step with the display density and the largest
    /// texture the GPU accepts.
    fn sync_display_metrics(&mut self, ctx: &egui::Context) {
        let max_texture_side = ctx.input(|i| i.max_texture_side);
        let max_side = u32::try_from(max_texture_side).unwrap_or(u32::MAX);

        if let Err(err) = self.controller.set_display_metrics(ctx.pixels_per_point(), max_side) {
            self.show_error(&err);
        }
    }

    /// Open a PDF file using the file picker
    fn open_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Select PDF file")
            .add_filter("PDF Files", &["pdf"])
            .pick_file()
        {
            self.handle(InputEvent::FileSelected(path));
        }
    }

    fn fit_request(&self) -> InputEvent {
        InputEvent::FitRequested {
            viewport_width: self.last_viewport_size.x,
            viewport_height: self.last_viewport_size.y,
        }
    }
}

impl eframe::App for ReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_display_metrics(ctx);
        self.handle_keyboard_shortcuts(ctx);
        self.draw_toolbar(ctx);
        self.draw_viewport(ctx);
        self.draw_error_dialog(ctx);
    }
}

impl ReaderApp {
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.error_dialog.is_some() || ctx.wants_keyboard_input() {
            return;
        }

        let mut open = false;
        let mut events = Vec::new();

        ctx.input(|i| {
            let cmd_or_ctrl = i.modifiers.command || i.modifiers.ctrl;

            if cmd_or_ctrl && i.key_pressed(egui::Key::O) {
                open = true;
            }
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp) {
                events.push(InputEvent::PreviousPage);
            }
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown) {
                events.push(InputEvent::NextPage);
            }
        });

        // The picker blocks, so it must run outside the input lock.
        if open {
            self.open_file();
        }
        for event in events {
            self.handle(event);
        }
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        let mut open = false;
        let mut events = Vec::new();
        let current_mode = self.controller.state().mode;
        let loaded = self.controller.is_loaded();
        let fit = self.fit_request();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("PDF Reader").strong().size(18.0).color(TITLE_COLOR));
                ui.separator();

                if ui.button("📂 Open").clicked() {
                    open = true;
                }

                ui.separator();

                ui.add_enabled_ui(loaded, |ui| {
                    if ui.button("Zoom in").clicked() {
                        events.push(InputEvent::ZoomIn);
                    }
                    if ui.button("Zoom out").clicked() {
                        events.push(InputEvent::ZoomOut);
                    }
                    if ui.button("Fit window").clicked() {
                        events.push(fit.clone());
                    }
                });

                ui.separator();

                for mode in MODE_BUTTONS {
                    if ui.selectable_label(current_mode == mode, mode.label()).clicked() {
                        events.push(InputEvent::ModeSelected(mode));
                    }
                }

                ui.separator();

                let entry = ui.add(
                    egui::TextEdit::singleline(&mut self.page_entry)
                        .desired_width(50.0)
                        .hint_text("Page"),
                );
                let submitted = entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Go").clicked() || submitted {
                    events.push(InputEvent::PageEntryConfirmed(self.page_entry.clone()));
                }

                ui.add_enabled_ui(loaded, |ui| {
                    if ui.button("◀").clicked() {
                        events.push(InputEvent::PreviousPage);
                    }
                    ui.label(self.controller.surface().indicator_text());
                    if ui.button("▶").clicked() {
                        events.push(InputEvent::NextPage);
                    }
                });
            });
        });

        if open {
            self.open_file();
        }
        for event in events {
            self.handle(event);
        }
    }

    fn draw_viewport(&mut self, ctx: &egui::Context) {
        let [r, g, b] = self.controller.state().mode.background();
        let frame = egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::from_rgb(r, g, b));
        let mut events = Vec::new();

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let viewport_size = ui.available_size();
            if viewport_size != self.last_viewport_size {
                if self.last_viewport_size != egui::Vec2::ZERO {
                    events.push(InputEvent::Resized);
                }
                self.last_viewport_size = viewport_size;
            }

            if self.error_dialog.is_none() && ui.rect_contains_pointer(ui.max_rect()) {
                events.extend(take_wheel_events(ctx));
            }

            let Some((texture_id, size)) = self.controller.surface().page_image() else {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a PDF to get started");
                });
                return;
            };

            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                // Center the page in the viewport
                let available = ui.available_size();
                let padding_x = ((available.x - size.x) / 2.0).max(0.0);
                let padding_y = ((available.y - size.y) / 2.0).max(0.0);

                ui.add_space(padding_y);
                ui.horizontal(|ui| {
                    ui.add_space(padding_x);
                    ui.image((texture_id, size));
                });
            });
        });

        for event in events {
            self.handle(event);
        }
    }

    fn draw_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(error) = &self.error_dialog else {
            return;
        };

        if error.show(ctx) {
            self.error_dialog = None;
        }
    }
}

/// Routes `event` to the controller and refreshes the page field from the
/// resulting state. Returns the error to report, if any.
fn apply_event<R: Rasterizer, S: DisplaySurface>(
    controller: &mut ViewportController<R, S>,
    page_entry: &mut String,
    event: InputEvent,
) -> Option<ViewerError> {
    let command = route(event)?;
    let result = controller.dispatch(command);

    // A failed open unloads the document, so errors resync too.
    *page_entry = page_entry_text(controller);
    result.err()
}

fn page_entry_text<R: Rasterizer, S: DisplaySurface>(
    controller: &ViewportController<R, S>,
) -> String {
    if controller.is_loaded() {
        (controller.state().current_page + 1).to_string()
    } else {
        String::new()
    }
}

/// Consumes this frame's wheel input so the scroll area does not also
/// scroll, folding it into at most one paging and one zoom event.
fn take_wheel_events(ctx: &egui::Context) -> Vec<InputEvent> {
    ctx.input_mut(|i| {
        let mut page_delta = 0.0;
        let mut zoom_delta = 0.0;

        for event in &i.events {
            if let egui::Event::MouseWheel { delta, modifiers, .. } = event {
                if is_zoom_modifier(*modifiers) {
                    zoom_delta += delta.y;
                } else {
                    page_delta += delta.y;
                }
            }
        }

        i.smooth_scroll_delta = egui::Vec2::ZERO;
        i.raw_scroll_delta = egui::Vec2::ZERO;

        wheel_events(page_delta, zoom_delta)
    })
}

fn is_zoom_modifier(modifiers: egui::Modifiers) -> bool {
    modifiers.command || modifiers.ctrl
}

fn wheel_events(page_delta: f32, zoom_delta: f32) -> Vec<InputEvent> {
    [(page_delta, false), (zoom_delta, true)]
        .into_iter()
        .filter(|(delta, _)| *delta != 0.0)
        .map(|(delta_y, zoom_modifier)| InputEvent::Wheel { delta_y, zoom_modifier })
        .collect()
}
