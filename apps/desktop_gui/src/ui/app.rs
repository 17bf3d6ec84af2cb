use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use form_core::{
    FormSession, Notification, SessionPhase, SubmissionLedger, SubmitError,
};
use shared::domain::{FieldDescriptor, FieldKind, FormType, Submission};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{classify_fetch_failure, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub initial_form_type: String,
}

struct Toast {
    id: u64,
    notification: Notification,
}

enum LedgerAction {
    Edit(usize),
    Delete(usize),
}

pub struct FormApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    session: FormSession,
    ledger: SubmissionLedger,
    selected_form_type: FormType,

    /// Snapshot taken out of the ledger whose schema is still loading.
    pending_edit: Option<Submission>,
    /// User-facing detail for the current fetch failure, if any.
    error_detail: Option<String>,

    toasts: Vec<Toast>,
    toast_seq: u64,
    status: String,
}

impl FormApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let selected_form_type = startup
            .initial_form_type
            .parse::<FormType>()
            .unwrap_or(FormType::UserInfo);
        let mut app = Self {
            cmd_tx,
            ui_rx,
            session: FormSession::new(),
            ledger: SubmissionLedger::new(),
            selected_form_type,
            pending_edit: None,
            error_detail: None,
            toasts: Vec::new(),
            toast_seq: 0,
            status: "Loading form configuration".to_string(),
        };
        // The raw startup string goes through unparsed so an unknown type
        // exercises the fetch-error surface.
        app.request_schema(&startup.initial_form_type);
        app
    }

    fn request_schema(&mut self, form_type: &str) {
        self.error_detail = None;
        let ticket = self.session.begin_fetch(form_type);
        self.status = format!("Fetching schema for {form_type}");
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchSchema {
                form_type: form_type.to_string(),
                ticket,
            },
            &mut self.status,
        );
    }

    fn push_toast(&mut self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "notification"
        );
        self.toast_seq += 1;
        self.toasts.push(Toast {
            id: self.toast_seq,
            notification,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::SchemaLoaded { ticket, schema } => {
                    let form_type = schema.form_type;
                    if self.session.resolve_fetch(ticket, Ok(schema)) {
                        self.status = format!("{} form ready", form_type.label());
                        if let Some(snapshot) = self.pending_edit.take() {
                            if snapshot.form_type == form_type {
                                self.session.load_submission(&snapshot);
                            }
                        }
                    }
                }
                UiEvent::SchemaFetchFailed { ticket, error } => {
                    let detail = classify_fetch_failure(&error);
                    if self.session.resolve_fetch(ticket, Err(error)) {
                        self.pending_edit = None;
                        self.error_detail = Some(detail.clone());
                        self.status = "Schema fetch failed".to_string();
                        self.push_toast(Notification::fetch_failed(detail));
                    }
                }
                UiEvent::BackendUnavailable(message) => {
                    self.status = message.clone();
                    self.push_toast(Notification::fetch_failed(message));
                }
            }
        }
    }

    fn begin_edit(&mut self, position: usize) {
        let Some(snapshot) = self.ledger.take_at(position) else {
            return;
        };
        let matches_active = self
            .session
            .schema()
            .map(|schema| schema.form_type == snapshot.form_type)
            .unwrap_or(false);
        if matches_active {
            self.session.load_submission(&snapshot);
        } else {
            // The snapshot belongs to a different form type: switch the
            // selector and rehydrate once that schema arrives.
            self.selected_form_type = snapshot.form_type;
            self.request_schema(snapshot.form_type.as_str());
            self.pending_edit = Some(snapshot);
        }
        self.push_toast(Notification::edit_mode());
    }

    fn delete_entry(&mut self, position: usize) {
        if self.ledger.remove_at(position).is_some() {
            self.push_toast(Notification::entry_deleted());
        }
    }

    fn show_type_selector(&mut self, ui: &mut egui::Ui) {
        ui.label("Select Form Type");
        let previous = self.selected_form_type;
        egui::ComboBox::from_id_salt("form_type_selector")
            .selected_text(self.selected_form_type.label())
            .width(220.0)
            .show_ui(ui, |ui| {
                for form_type in FormType::ALL {
                    ui.selectable_value(&mut self.selected_form_type, form_type, form_type.label());
                }
            });
        if self.selected_form_type != previous {
            self.pending_edit = None;
            self.request_schema(self.selected_form_type.as_str());
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let Some(schema) = self.session.schema() else {
            return;
        };
        let fields: Vec<FieldDescriptor> = schema.fields.clone();
        let mut edits: Vec<(String, String)> = Vec::new();

        for field in &fields {
            ui.label(&field.label);
            if field.kind.is_choice() {
                self.show_choice_field(ui, field, &mut edits);
            } else {
                self.show_input_field(ui, field, &mut edits);
            }
            if self.session.is_missing(&field.name) {
                ui.label(
                    egui::RichText::new("This field is required")
                        .color(egui::Color32::from_rgb(220, 64, 64))
                        .small(),
                );
            }
            ui.add_space(8.0);
        }

        for (name, value) in edits {
            self.session.set_value(&name, value);
        }

        ui.add(
            egui::ProgressBar::new(self.session.progress())
                .show_percentage()
                .animate(false),
        );
        ui.add_space(8.0);

        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new("Submit"))
            .clicked()
        {
            match self.session.submit() {
                Ok(submission) => {
                    self.ledger.append(submission);
                    self.status = "Submission recorded".to_string();
                    self.push_toast(Notification::submitted());
                }
                Err(SubmitError::MissingRequired { missing }) => {
                    self.status = format!("{} required field(s) still empty", missing.len());
                }
                Err(SubmitError::NotReady) => {}
            }
        }
    }

    fn show_choice_field(
        &self,
        ui: &mut egui::Ui,
        field: &FieldDescriptor,
        edits: &mut Vec<(String, String)>,
    ) {
        let current = self.session.value(&field.name).unwrap_or("").to_string();
        let display = if current.is_empty() {
            format!("Select {}", field.label)
        } else {
            current.clone()
        };
        // An empty options list renders an empty choice list on purpose.
        egui::ComboBox::from_id_salt(&field.name)
            .selected_text(display)
            .width(260.0)
            .show_ui(ui, |ui| {
                for option in &field.options {
                    if ui.selectable_label(current == *option, option).clicked() {
                        edits.push((field.name.clone(), option.clone()));
                    }
                }
            });
    }

    fn show_input_field(
        &self,
        ui: &mut egui::Ui,
        field: &FieldDescriptor,
        edits: &mut Vec<(String, String)>,
    ) {
        let mut buffer = self.session.value(&field.name).unwrap_or("").to_string();
        let editor = egui::TextEdit::singleline(&mut buffer)
            .password(field.kind == FieldKind::Password)
            .hint_text(input_hint(field.kind))
            .desired_width(260.0);
        if ui.add(editor).changed() {
            edits.push((field.name.clone(), buffer));
        }
    }

    fn show_error_panel(&mut self, ui: &mut egui::Ui, message: &str) {
        let detail = self.error_detail.clone();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(
                egui::RichText::new("Failed to load form")
                    .color(egui::Color32::from_rgb(220, 64, 64))
                    .strong(),
            );
            ui.label(detail.unwrap_or_else(|| message.to_string()));
            if ui.button("Try Again").clicked() {
                self.request_schema(self.selected_form_type.as_str());
            }
        });
    }

    fn show_ledger(&mut self, ui: &mut egui::Ui) {
        if self.ledger.is_empty() {
            return;
        }
        ui.separator();
        ui.heading("Submitted Data");

        let mut action: Option<LedgerAction> = None;
        egui::Grid::new("submission_table")
            .striped(true)
            .num_columns(3)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for (position, submission) in self.ledger.iter().enumerate() {
                    ui.strong(format!(
                        "#{} {}",
                        position + 1,
                        submission.form_type.label()
                    ));
                    ui.label(
                        submission
                            .submitted_at
                            .with_timezone(&Local)
                            .format("%H:%M:%S")
                            .to_string(),
                    );
                    ui.horizontal(|ui| {
                        if ui.small_button("Edit").clicked() {
                            action = Some(LedgerAction::Edit(position));
                        }
                        if ui.small_button("Delete").clicked() {
                            action = Some(LedgerAction::Delete(position));
                        }
                    });
                    ui.end_row();

                    for (name, value) in &submission.values {
                        ui.label(name);
                        ui.label(value);
                        ui.label("");
                        ui.end_row();
                    }
                }
            });

        match action {
            Some(LedgerAction::Edit(position)) => self.begin_edit(position),
            Some(LedgerAction::Delete(position)) => self.delete_entry(position),
            None => {}
        }
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        let mut dismissed: Option<u64> = None;
        egui::TopBottomPanel::bottom("toast_panel").show(ctx, |ui| {
            for toast in &self.toasts {
                ui.horizontal(|ui| {
                    ui.strong(&toast.notification.title);
                    ui.label(&toast.notification.description);
                    if ui.small_button("Close").clicked() {
                        dismissed = Some(toast.id);
                    }
                });
            }
        });
        if let Some(id) = dismissed {
            self.toasts.retain(|toast| toast.id != id);
        }
    }
}

fn input_hint(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "name@example.com",
        FieldKind::Number => "numbers only",
        FieldKind::Date => "YYYY-MM-DD",
        FieldKind::Text | FieldKind::Password | FieldKind::Dropdown => "",
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        // Poll for backend events while a fetch is outstanding.
        if matches!(self.session.phase(), SessionPhase::Loading { .. }) {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        self.show_toasts(ctx);

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.small(egui::RichText::new(&self.status).weak());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Dynamic Form Workbench");
                ui.add_space(8.0);
                self.show_type_selector(ui);
                ui.add_space(12.0);

                match self.session.phase().clone() {
                    SessionPhase::Idle => {
                        ui.label("Select a form type to begin.");
                    }
                    SessionPhase::Loading { form_type } => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(format!("Loading {form_type}..."));
                        });
                    }
                    SessionPhase::Ready { .. } => {
                        self.show_form(ui);
                    }
                    SessionPhase::Failed { message } => {
                        self.show_error_panel(ui, &message);
                    }
                }

                self.show_ledger(ui);
            });
        });
    }
}
