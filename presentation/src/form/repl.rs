//! REPL (Read-Eval-Print Loop) for the interactive form

use super::command::FormCommand;
use super::field::FormField;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressMode;
use colored::Colorize;
use content_request_application::{
    DirectoryLoad, LoadDirectoryUseCase, SubmissionProgress, SubmitRequestUseCase,
};
use content_request_domain::{
    DirectoryFetch, FormFields, FormVariant, OutputFormat, SessionContext, SubmitAction,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::Path;
use tracing::debug;

/// What the loop does after a command
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Print the text (if any) and read the next line
    Continue(String),
    /// Read client names until an empty line, then bulk-add them
    ReadBulk,
    Exit,
}

/// Interactive content request form
pub struct FormRepl {
    session: SessionContext,
    fields: FormFields,
    submit: SubmitRequestUseCase,
    directory: Option<LoadDirectoryUseCase>,
    repl: ReplConfig,
    output: OutputConfig,
}

impl FormRepl {
    pub fn new(session: SessionContext, submit: SubmitRequestUseCase) -> Self {
        Self {
            session,
            fields: FormFields::default(),
            submit,
            directory: None,
            repl: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// Attach the record store loader used by the remote form
    pub fn with_directory(mut self, directory: LoadDirectoryUseCase) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.repl.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        if let Some(text) = self.load_directory(false).await {
            println!("{}", text);
        }

        let prompt = format!("{}> ", self.session.variant());
        loop {
            let readline = rl.readline(&prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if !line.starts_with('/') {
                        println!("Use /set <field> <value> to fill the form, /help for commands");
                        continue;
                    }

                    match self.dispatch(line).await {
                        Step::Continue(text) => {
                            if !text.is_empty() {
                                println!("{}", text);
                            }
                        }
                        Step::ReadBulk => {
                            let text = Self::read_bulk(&mut rl)?;
                            println!("{}", self.bulk_add(&text));
                        }
                        Step::Exit => {
                            println!("Bye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Content Request - Form Mode        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Form: {}", self.session.variant());
        println!();
        println!("Commands:");
        println!("  /set <field> <value> - Fill a field");
        println!("  /submit              - Send the request");
        println!("  /help                - Show all commands");
        println!("  /quit                - Exit");
        println!();
    }

    fn read_bulk(rl: &mut DefaultEditor) -> RlResult<String> {
        println!("Enter one client per line; an empty line finishes.");
        let mut lines = Vec::new();
        loop {
            match rl.readline("... ") {
                Ok(line) if line.trim().is_empty() => break,
                Ok(line) => lines.push(line),
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(lines.join("\n"))
    }

    /// Parse and run one slash command
    async fn dispatch(&mut self, line: &str) -> Step {
        let command = match FormCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                return Step::Continue(format!("{}\nType /help for available commands", e));
            }
        };
        debug!("Form command: {:?}", command);

        match command {
            FormCommand::Submit => Step::Continue(self.submit().await),
            FormCommand::Show => Step::Continue(ConsoleFormatter::format_fields(
                &self.fields,
                &self.session,
            )),
            FormCommand::Set { field, value } => Step::Continue(self.set_field(&field, &value)),
            FormCommand::Clients => Step::Continue(self.show_clients()),
            FormCommand::Add(name) => Step::Continue(self.add_client(&name)),
            FormCommand::Remove(name) => Step::Continue(self.remove_client(&name)),
            FormCommand::Bulk => match self.session.static_directory_mut() {
                Ok(_) => Step::ReadBulk,
                Err(e) => Step::Continue(e.to_string()),
            },
            FormCommand::Export(path) => {
                let path = path.unwrap_or_else(|| self.repl.export_path.clone());
                Step::Continue(self.export_clients(&path))
            }
            FormCommand::Import(path) => Step::Continue(self.import_clients(&path)),
            FormCommand::Reload => Step::Continue(
                self.load_directory(true)
                    .await
                    .unwrap_or_else(|| "This form does not use a remote client directory".into()),
            ),
            FormCommand::Login(name) => Step::Continue(self.set_login(&name)),
            FormCommand::Clear => {
                self.fields = FormFields::default();
                Step::Continue("Form cleared".to_string())
            }
            FormCommand::Help => Step::Continue(self.help()),
            FormCommand::Quit => Step::Exit,
        }
    }

    fn progress(&self) -> Box<dyn SubmissionProgress> {
        ProgressMode::detect(self.repl.show_progress, self.output.format).reporter()
    }

    async fn submit(&mut self) -> String {
        let action = SubmitAction::new(self.fields.clone());
        let progress = self.progress();
        let outcome = self
            .submit
            .execute_with_progress(&mut self.session, action, progress.as_ref())
            .await;

        match (outcome, self.output.format) {
            (Ok(result), OutputFormat::Json) => ConsoleFormatter::format_result_json(&result),
            (Ok(result), OutputFormat::Text) => ConsoleFormatter::format_result(&result),
            (Err(e), OutputFormat::Json) => ConsoleFormatter::format_issues_json(e.issues()),
            (Err(e), OutputFormat::Text) => ConsoleFormatter::format_issues(e.issues()),
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> String {
        let field = match name.parse::<FormField>() {
            Ok(field) => field,
            Err(e) => return e.to_string(),
        };

        // Client input resolves against the directory (index or name)
        let value = if field == FormField::ClientName && !value.is_empty() {
            match self.session.select_client(value) {
                Ok(name) => name,
                Err(e) => return format!("{} (see /clients)", e),
            }
        } else {
            value.to_string()
        };

        let variant = self.session.variant();
        match field.assign(&mut self.fields, variant, &value) {
            Ok(()) => format!("{} {} = {}", "✓".green(), field.label(), field.value(&self.fields)),
            Err(e) => e.to_string(),
        }
    }

    fn show_clients(&self) -> String {
        match self.output.format {
            OutputFormat::Json => ConsoleFormatter::format_directory_json(&self.session),
            OutputFormat::Text => ConsoleFormatter::format_directory(&self.session),
        }
    }

    fn add_client(&mut self, name: &str) -> String {
        match self
            .session
            .static_directory_mut()
            .and_then(|directory| directory.add(name))
        {
            Ok(added) => format!("{} Added client '{}'", "✓".green(), added),
            Err(e) => format!("{} {}", "✗".red(), e),
        }
    }

    fn remove_client(&mut self, name: &str) -> String {
        let name = name.trim();
        match self
            .session
            .static_directory_mut()
            .and_then(|directory| directory.remove(name))
        {
            Ok(()) => {
                if self.fields.client_name == name {
                    self.fields.client_name.clear();
                }
                format!("{} Removed client '{}'", "✓".green(), name)
            }
            Err(e) => format!("{} {}", "✗".red(), e),
        }
    }

    fn bulk_add(&mut self, text: &str) -> String {
        match self.session.static_directory_mut() {
            Ok(directory) => ConsoleFormatter::format_batch(&directory.bulk_add(text)),
            Err(e) => e.to_string(),
        }
    }

    fn export_clients(&mut self, path: &Path) -> String {
        let (json, count) = match self.session.static_directory_mut() {
            Ok(directory) => (directory.export(), directory.len()),
            Err(e) => return e.to_string(),
        };

        match std::fs::write(path, json) {
            Ok(()) => format!(
                "{} Exported {} client(s) to {}",
                "✓".green(),
                count,
                path.display()
            ),
            Err(e) => format!("{} Could not write {}: {}", "✗".red(), path.display(), e),
        }
    }

    fn import_clients(&mut self, path: &Path) -> String {
        let directory = match self.session.static_directory_mut() {
            Ok(directory) => directory,
            Err(e) => return e.to_string(),
        };

        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => return format!("{} Could not read {}: {}", "✗".red(), path.display(), e),
        };

        match directory.import(&json) {
            Ok(report) => ConsoleFormatter::format_batch(&report),
            Err(e) => format!("{} {}", "✗".red(), e),
        }
    }

    /// Load (or with `reload`, re-query) the remote directory.
    ///
    /// `None` when this session has no remote directory.
    async fn load_directory(&mut self, reload: bool) -> Option<String> {
        let loader = self.directory.as_ref()?;
        let progress = self.progress();

        let loaded = if reload {
            loader
                .reload_with_progress(&mut self.session, progress.as_ref())
                .await
        } else {
            loader
                .ensure_loaded_with_progress(&mut self.session, progress.as_ref())
                .await
        };

        loaded.ok().map(|load| Self::describe_load(&load))
    }

    fn describe_load(load: &DirectoryLoad) -> String {
        match &load.fetch {
            DirectoryFetch::Loaded(entries) => {
                format!("{} Loaded {} client(s)", "✓".green(), entries.len())
            }
            DirectoryFetch::Empty => format!(
                "{} No active clients found; type any client name",
                "!".yellow()
            ),
            DirectoryFetch::Failed(reason) => format!(
                "{} Could not load clients: {}\n  Type any client name instead",
                "✗".red(),
                reason
            ),
        }
    }

    fn set_login(&mut self, name: &str) -> String {
        if !self.session.variant().tracks_login() {
            return format!(
                "The {} form does not record who submits",
                self.session.variant()
            );
        }
        self.session.set_login(name.trim());
        format!("{} Submitting as {}", "✓".green(), self.session.login())
    }

    fn help(&self) -> String {
        let variant = self.session.variant();
        let mut lines = vec![
            String::new(),
            "Commands:".to_string(),
            "  /set <field> <value> - Fill a field (no value clears it)".to_string(),
            "  /show                - Show the form".to_string(),
            "  /submit              - Send the request".to_string(),
            "  /clear               - Empty every field".to_string(),
            "  /clients             - List clients".to_string(),
        ];
        match variant {
            FormVariant::Static => {
                lines.push("  /add <name>          - Add a client".to_string());
                lines.push("  /remove <name>       - Remove a client".to_string());
                lines.push("  /bulk                - Add several clients, one per line".to_string());
                lines.push("  /export [path]       - Save the client list as JSON".to_string());
                lines.push("  /import <path>       - Merge a JSON client list".to_string());
            }
            FormVariant::Remote => {
                lines.push("  /reload              - Fetch the client list again".to_string());
            }
            FormVariant::Generic => {
                lines.push("  /login <name>        - Change who submits".to_string());
            }
        }
        lines.push("  /help, /h, /?        - Show this help".to_string());
        lines.push("  /quit, /exit, /q     - Exit".to_string());
        lines.push(String::new());
        lines.push("Fields:".to_string());
        for field in FormField::for_variant(variant) {
            lines.push(format!("  {:<9} {}", field.key(), field.label()));
        }
        lines.join("\n")
    }
}
