use iced::widget::{column, container, mouse_area, row, text, Column, Container, Row};
use iced::{Alignment, Background, Border, Color, Element, Length, Renderer, Theme};
use iced_font_awesome::fa_icon_solid;
use crate::app::Message;
use crate::models::Tone;

const ACCENT: Color = Color { r: 0.96, g: 0.55, b: 0.13, a: 1.0 };

pub fn tone_color(tone: Tone, theme: &Theme) -> Color {
    let palette = theme.extended_palette();
    match tone {
        Tone::Primary => palette.primary.base.color,
        Tone::Secondary => palette.success.base.color,
        Tone::Accent => ACCENT,
        Tone::Destructive => palette.danger.base.color,
        Tone::Muted => palette.secondary.base.color,
    }
}

pub fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

pub fn icon<'a>(name: &'a str, size: f32) -> Element<'a, Message> {
    fa_icon_solid(name)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        })
        .into()
}

pub fn muted_icon<'a>(name: &'a str, size: f32) -> Element<'a, Message> {
    fa_icon_solid(name)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.color),
        })
        .into()
}

pub fn badge<'a>(label: impl ToString, tone: Tone) -> Container<'a, Message> {
    container(text(label.to_string()).size(12))
        .padding([2, 8])
        .style(move |theme: &Theme| {
            let color = tone_color(tone, theme);
            container::Style {
                text_color: Some(color),
                background: Some(Background::Color(Color { a: 0.1, ..color })),
                border: Border {
                    color: Color { a: 0.25, ..color },
                    width: 1.0,
                    radius: 10.0.into(),
                },
                ..container::Style::default()
            }
        })
}

pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(container::bordered_box)
}

/// Card that highlights with the primary color when selected and sends
/// `on_press` when clicked.
pub fn selectable_card<'a>(
    content: impl Into<Element<'a, Message>>,
    selected: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let body = container(content)
        .padding(16)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let mut style = container::bordered_box(theme);
            if selected {
                let primary = palette.primary.base.color;
                style.border = Border {
                    color: primary,
                    width: 2.0,
                    radius: style.border.radius,
                };
                style.background = Some(Background::Color(Color { a: 0.05, ..primary }));
            }
            style
        });
    mouse_area(body).on_press(on_press).into()
}

pub fn card_title<'a>(icon_name: &'a str, title: impl ToString) -> Row<'a, Message> {
    row![icon(icon_name, 18.0), text(title.to_string()).size(20)]
        .spacing(8)
        .align_y(Alignment::Center)
}

pub fn page_header<'a>(title: &'a str, subtitle: &'a str) -> Column<'a, Message> {
    column![
        text(title).size(36),
        text(subtitle).size(18).style(text::secondary),
    ]
    .spacing(8)
    .width(Length::Fill)
    .align_x(Alignment::Center)
}

/// First character of every space-separated word: "Alex Kim" -> "AK".
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn avatar<'a>(name: &str, size: f32) -> Container<'a, Message> {
    container(text(initials(name)).size(size * 0.35))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                text_color: Some(palette.primary.base.color),
                background: Some(Background::Color(palette.background.weak.color)),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 999.0.into(),
                },
                ..container::Style::default()
            }
        })
}

pub fn stars<'a>(rating: f32) -> Row<'a, Message> {
    row![
        fa_icon_solid("star")
            .size(14.0)
            .style(|_: &Theme| text::Style { color: Some(Color::from_rgb(0.98, 0.8, 0.08)) }),
        text(format!("{:.1}", rating)).size(14),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
}

pub fn label_value<'a>(label: &'a str, value: impl ToString) -> Row<'a, Message> {
    row![
        text(label).style(text::secondary),
        iced::widget::horizontal_space(),
        text(value.to_string()),
    ]
    .width(Length::Fill)
}

/// Thousands separators: 15000 -> "15,000".
pub fn grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Alex Kim"), "AK");
        assert_eq!(initials("Dr. Sarah Johnson"), "DSJ");
        assert_eq!(initials("Cher"), "C");
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(950), "950");
        assert_eq!(grouped(1200), "1,200");
        assert_eq!(grouped(15000), "15,000");
        assert_eq!(grouped(1234567), "1,234,567");
    }

    #[test]
    fn unknown_values_share_the_muted_color() {
        let theme = Theme::Light;
        assert_eq!(tone_color(Tone::Muted, &theme), theme.extended_palette().secondary.base.color);
        assert_eq!(tone_color(Tone::Accent, &theme), ACCENT);
    }
}
