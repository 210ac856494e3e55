use std::fmt;
use iced::widget::{button, column, horizontal_space, pick_list, row, text, text_input, Column, Container, Row};
use iced::{Alignment, Length};
use crate::app::{App, Message};
use crate::catalog::ALL_CATEGORIES;
use crate::data::CATEGORIES;
use crate::models::{Course, Tone};
use crate::route::Route;
use crate::ui::{badge, card, grouped, icon_button_content, muted_icon, page_header, stars};

/// Category entry of the filter dropdown; the sentinel reads "All Categories".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CategoryOption(&'static str);

impl fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == ALL_CATEGORIES {
            write!(f, "All Categories")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn course_card(course: &Course) -> Column<'_, Message> {
    let header = row![
        badge(&course.level, course.level.tone()),
        horizontal_space(),
        badge(&course.category, Tone::Muted),
    ];
    let meta = row![
        row![muted_icon("clock", 13.0), text(&course.duration).size(14)].spacing(4),
        row![muted_icon("users", 13.0), text(grouped(course.students)).size(14)].spacing(4),
        stars(course.rating),
    ]
    .spacing(16)
    .align_y(Alignment::Center);
    let tags = course
        .tags
        .iter()
        .fold(Row::new().spacing(6), |r, tag| r.push(badge(tag, Tone::Muted)));

    column![
        header,
        text(&course.title).size(20),
        text(format!("by {}", course.instructor)).style(text::secondary),
        text(&course.description).size(14),
        meta,
        tags,
        row![
            text(format!("${}", course.price)).size(24),
            horizontal_space(),
            button(icon_button_content(muted_icon("arrow-right", 13.0), "View Details"))
                .on_press(Message::Navigate(Route::CourseDetails { id: course.id })),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(10)
}

pub fn courses_screen(app: &App) -> Container<'_, Message> {
    let filter = &app.catalog_filter;
    let view = filter.view(app.courses.as_slice());

    let options: Vec<CategoryOption> = CATEGORIES.iter().copied().map(CategoryOption).collect();
    let selected = CATEGORIES
        .iter()
        .copied()
        .find(|c| *c == filter.category)
        .map(CategoryOption);

    let controls = row![
        text_input("Search courses, instructors...", &filter.search)
            .on_input(Message::SearchChanged)
            .padding(10)
            .width(Length::FillPortion(3)),
        pick_list(options, selected, |c: CategoryOption| {
            Message::CategorySelected(c.0.to_string())
        })
        .width(Length::FillPortion(1)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut results = Column::new().spacing(16);
    if view.is_empty() {
        results = results.push(card(
            column![
                muted_icon("magnifying-glass", 32.0),
                text("No courses found").size(20),
                text("Try adjusting your search or filter criteria").style(text::secondary),
                button("Clear Filters")
                    .on_press(Message::ClearFilters)
                    .style(button::secondary),
            ]
            .spacing(10)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        ));
    } else {
        let per_row = if app.is_compact() { 1 } else { 2 };
        for chunk in view.shown.chunks(per_row) {
            results = results.push(
                chunk
                    .iter()
                    .fold(Row::new().spacing(16), |r, course| r.push(card(course_card(*course)))),
            );
        }
    }

    let content = column![
        page_header(
            "Explore Our Courses",
            "Discover courses taught by industry experts and advance your skills",
        ),
        controls,
        text(view.summary()).style(text::secondary),
        results,
    ]
    .spacing(24);

    Container::new(content).width(Length::Fill).padding(40)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_category_reads_as_all() {
        assert_eq!(CategoryOption(ALL_CATEGORIES).to_string(), "All Categories");
        assert_eq!(CategoryOption("Design").to_string(), "Design");
    }
}
