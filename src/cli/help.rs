use crate::pass::{MAX_LENGTH, MIN_LENGTH, Policy};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    let length_desc = format!(
        "Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: {})",
        Policy::default().length
    );

    box_top("Strongpass");
    box_line_center("Policy-driven password generator");
    box_line("");
    box_line("Every enabled character class appears at least once. Passwords");
    box_line("containing common weak patterns (password, qwerty, 123456, ...)");
    box_line("are discarded and regenerated.");
    box_line("");
    box_line("USAGE:");
    box_line("  strongpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", &length_desc);
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-lower", "Exclude lowercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_opt("      --no-special", "Exclude symbols");
    box_line("");
    box_line(" Output:");
    box_opt("  -e, --score", "Show entropy and strength tier for each password");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved defaults");
    box_opt("      --save", "Save length, count and classes as defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  strongpass                  One 16-character password");
    box_line("  strongpass -l 24 -n 3 -e    Three passwords with strength reports");
    box_line("  strongpass --no-special     Alphanumeric only");
    box_line("  strongpass -l 20 --save     Save 20 characters as the default");
    box_line("  strongpass -s -b            Saved defaults, copied to clipboard");
    box_line("");
    box_line("Logging goes to stderr; set RUST_LOG=debug to see retries.");
    box_bottom();
    println!();
}
