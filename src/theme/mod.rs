use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_title: Style,
    pub header_subtitle: Style,
    pub header: Style,

    pub tab_active: Style,
    pub tab_inactive: Style,
    pub sidebar_heading: Style,

    pub card_title: Style,
    pub command: Style,
    pub description: Style,
    pub example: Style,
    pub origin: Style,
    pub no_results: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_summary: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_active: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_title: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().bg(p.surface0).fg(p.subtext1),
            header: Style::default().bg(p.base).fg(p.text),

            tab_active: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().bg(p.surface0).fg(p.subtext0),
            sidebar_heading: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),

            card_title: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            command: Style::default()
                .bg(p.mantle)
                .fg(p.green)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(p.text),
            example: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            origin: Style::default().fg(p.overlay1).add_modifier(Modifier::ITALIC),
            no_results: Style::default()
                .bg(dim_color(p.yellow, 0.25))
                .fg(p.yellow)
                .add_modifier(Modifier::BOLD),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.crust).fg(p.subtext0),
            footer_summary: Style::default().bg(p.crust).fg(p.teal),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_active: Style::default()
                .bg(p.surface1)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
