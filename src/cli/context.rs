//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use zeroize::Zeroizing;

use super::{CliFlags, help, prompts, quiet};
use crate::pass::{self, GenerateError, Generator, Policy, StrengthReport};
use crate::random::{RandomSource, SecureRand};
use crate::settings::Settings;
use crate::terminal::strength_box;

/// Why a run stopped before finishing normally.
#[derive(Debug)]
pub enum Stop {
    /// Early exit, not an error.
    Done,
    Failed(GenerateError),
}

impl From<GenerateError> for Stop {
    fn from(err: GenerateError) -> Self {
        Stop::Failed(err)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments and load saved defaults.
    pub fn new(args: Vec<String>) -> Result<Self, super::ParseError> {
        let flags = super::parse(&args)?;

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            log::warn!("settings load failed: {e}");
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Ok(Self::with_settings(flags, saved_settings))
    }

    pub fn with_settings(flags: CliFlags, saved_settings: Settings) -> Self {
        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings::default()
        };

        Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
        }
    }

    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.handle_save();
        self.handle_clipboard()?;
        self.generate_output()?;
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            help::print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("strongpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    pub fn apply_flags(&mut self) {
        if self.flags.saved && self.flags.has_policy_args() {
            debug!("command-line flags override saved defaults");
        }
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_upper {
            self.settings.include_upper = false;
        }
        if self.flags.no_lower {
            self.settings.include_lower = false;
        }
        if self.flags.no_digits {
            self.settings.include_digits = false;
        }
        if self.flags.no_special {
            self.settings.include_symbols = false;
        }
    }

    fn handle_save(&mut self) {
        if !self.flags.save {
            return;
        }
        // Invalid policies are never persisted
        if let Err(e) = self.settings.policy().validate() {
            prompts::warn(&format!("Not saving defaults: {}", e));
            return;
        }
        self.saved_settings = self.settings.clone();
        match self.saved_settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Stop> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                debug!("clipboard unavailable: {e}");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Stop::Done);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), GenerateError> {
        let policy = self.settings.policy();
        policy.validate()?;

        let mut generator = Generator::new(SecureRand::os());
        let charset_size = pass::charset::size(&policy);
        let batch = self.generate_batch(&mut generator, &policy)?;
        info!(
            "generated {} password(s) of length {} from {charset_size} chars",
            batch.len(),
            policy.target_length()
        );

        let mut clipboard_text = Zeroizing::new(String::new());
        for (password, report) in &batch {
            if self.clipboard.is_some() {
                clipboard_text.push_str(password);
                clipboard_text.push('\n');
            } else {
                println!("{}", password.as_str());
            }

            if let Some(report) = report {
                strength_box(report, charset_size, generator.source_name());
                println!();
            }
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(clipboard_payload(&mut clipboard_text)) {
                Ok(()) => prompts::clipboard_copied(batch.len()),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        }

        Ok(())
    }

    /// Generate the requested number of passwords, each paired with its
    /// strength report when `--score` is set. `--quiet` does not affect reports.
    pub fn generate_batch<R: RandomSource>(
        &self,
        generator: &mut Generator<R>,
        policy: &Policy,
    ) -> Result<Vec<(Zeroizing<String>, Option<StrengthReport>)>, GenerateError> {
        let count = self.settings.number_of_passwords.max(1);
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            let password = Zeroizing::new(generator.generate(policy)?);
            let report = self.flags.score.then(|| pass::score(&password, policy));
            batch.push((password, report));
        }
        Ok(batch)
    }
}

/// Move the newline-joined batch out of `text` without the trailing newline.
/// The buffer is handed over, not copied, so no unzeroized duplicate remains.
fn clipboard_payload(text: &mut Zeroizing<String>) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    std::mem::take(&mut **text)
}
