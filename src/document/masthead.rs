//! Fixed front-page furniture: edition numbering, dateline and copy.

use chrono::NaiveDate;

use crate::theme::day_of_year;

pub const TITLE: &str = "AI\u{98ce}\u{5411}\u{6807}\u{4fe1}\u{606f}\u{5dee}";
pub const SUBTITLE: &str = "AI INFORMATION GAP";
pub const HERO_TAG: &str = "Lead Story";
pub const DESK: &str = "AI Systems";
pub const SIGNAL: &str = "Realtime";
pub const FOOTER: &str = "End of Page";

pub const STANDFIRST_PLACEHOLDER: &str = "Add a lead paragraph to open the story.";
pub const BODY_PLACEHOLDER: &str = "Add sections below the lead story to fill the columns.";
pub const EDITOR_PLACEHOLDER: &str = "# Type your markdown here...";

/// The article the editor opens with when no file is given.
pub const DEFAULT_MARKDOWN: &str = r#"# Future of AI: The Dawn of AGI

**Beijing, China** -- In a groundbreaking announcement today, researchers unveiled a new paradigm in artificial intelligence.

## The Quantum Leap

Quantum computing has merged with neural networks to create a system capable of simulating human intuition.

> "This is not just faster processing; it's a new form of digital consciousness," says Dr. Li, lead researcher.

### Key Features
- **Instant Learning**: Models adapt in real-time.
- **Energy Efficiency**: Consumes 99% less power.
- **Ethics Engine**: Built-in safeguards against misuse.

Click [here](https://example.com) to read the full technical paper.
"#;

/// Edition number for a date. 1 January is issue 1.
pub fn issue_number(date: NaiveDate) -> u32 {
    day_of_year(date) + 1
}

/// Edition number padded to three digits, e.g. `"007"`.
pub fn issue_label(date: NaiveDate) -> String {
    format!("{:03}", issue_number(date))
}

/// Dateline in British short form, e.g. `"Sun, 18 Oct 2026"`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}
