//! Platform-neutral report messages.
//!
//! Reports are assembled by the service layer and only turned into Discord embeds
//! when they are sent, which keeps report contents easy to assert on in tests.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

pub const COLOR_RED: u32 = 0xe74c3c;
pub const COLOR_GREEN: u32 = 0x2ecc71;
pub const COLOR_BLURPLE: u32 = 0x5865f2;
pub const COLOR_PURPLE: u32 = 0x9b59b6;

/// Maximum length of an embed field value accepted by Discord.
pub const FIELD_VALUE_LIMIT: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

/// Structured message rendered as a Discord embed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModerationReport {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub thumbnail_url: Option<String>,
    pub fields: Vec<ReportField>,
    pub footer: Option<ReportFooter>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ModerationReport {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(ReportField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.footer = Some(ReportFooter {
            text: text.into(),
            icon_url,
        });
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Looks up a field by name.
    #[cfg(test)]
    pub fn get_field(&self, name: &str) -> Option<&ReportField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Renders the report as a Discord embed.
    pub fn to_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new().title(&self.title).colour(self.color);

        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        if let Some(url) = &self.thumbnail_url {
            embed = embed.thumbnail(url);
        }
        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }
        if let Some(footer) = &self.footer {
            let mut create_footer = CreateEmbedFooter::new(&footer.text);
            if let Some(icon_url) = &footer.icon_url {
                create_footer = create_footer.icon_url(icon_url);
            }
            embed = embed.footer(create_footer);
        }
        // Out-of-range timestamps are left off the embed
        if let Some(timestamp) = self
            .timestamp
            .and_then(|t| Timestamp::from_unix_timestamp(t.timestamp()).ok())
        {
            embed = embed.timestamp(timestamp);
        }

        embed
    }
}

/// Joins list entries one per line, capped at `FIELD_VALUE_LIMIT` characters.
pub fn truncate_list<S: AsRef<str>>(entries: &[S]) -> String {
    let joined = entries
        .iter()
        .map(|entry| entry.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    truncate_value(&joined)
}

/// Caps a field value at `FIELD_VALUE_LIMIT` characters.
pub fn truncate_value(value: &str) -> String {
    match value.char_indices().nth(FIELD_VALUE_LIMIT) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value.to_string(),
    }
}
