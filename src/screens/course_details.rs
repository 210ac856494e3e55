use iced::widget::{button, column, horizontal_rule, horizontal_space, row, text, Column, Container, Row};
use iced::{Alignment, Element, Length};
use crate::app::{App, DetailsTab, Message};
use crate::data;
use crate::models::{Course, CourseDetails, Tone};
use crate::route::Route;
use crate::ui::{avatar, badge, card, card_title, grouped, icon, label_value, muted_icon, stars};

fn tab_bar(current: DetailsTab) -> Row<'static, Message> {
    DetailsTab::ALL.iter().fold(Row::new().spacing(6), |r, tab| {
        let style = if *tab == current { button::primary } else { button::secondary };
        r.push(
            button(text(tab.to_string()))
                .on_press(Message::DetailsTabSelected(*tab))
                .style(style)
                .width(Length::Fill),
        )
    })
}

fn overview(course: &Course, details: Option<&CourseDetails>) -> Column<'static, Message> {
    let mut col = Column::new().spacing(16);
    match details {
        Some(details) => {
            col = col
                .push(card(column![
                    text("About This Course").size(20),
                    text(details.long_description.clone()),
                ].spacing(8)))
                .push(card(column![
                    text("What You'll Learn").size(20),
                    owned_list("circle-check", &details.what_you_learn),
                ].spacing(8)))
                .push(card(column![
                    text("Requirements").size(20),
                    owned_list("circle", &details.requirements),
                ].spacing(8)));
        }
        None => {
            col = col.push(card(column![
                text("About This Course").size(20),
                text(course.description.clone()),
            ].spacing(8)));
        }
    }
    col
}

fn owned_list(marker: &'static str, items: &[String]) -> Column<'static, Message> {
    items.iter().fold(Column::new().spacing(6), |c, item| {
        c.push(row![icon(marker, 13.0), text(item.clone())].spacing(8).align_y(Alignment::Center))
    })
}

// Extended details are rebuilt on every render, so these views own their text.
fn curriculum(details: Option<&CourseDetails>) -> Column<'static, Message> {
    let Some(details) = details else {
        return column![card(
            column![
                muted_icon("list", 28.0),
                text("The detailed curriculum for this course will be published soon.")
                    .style(text::secondary),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        )];
    };
    details.curriculum.iter().fold(Column::new().spacing(12), |c, week| {
        c.push(card(
            column![
                row![
                    badge(format!("Week {}", week.week), Tone::Primary),
                    text(week.title.clone()).size(18),
                    horizontal_space(),
                    text(format!("{} lessons • {}", week.lessons, week.duration))
                        .size(14)
                        .style(text::secondary),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
                week.topics
                    .iter()
                    .fold(Row::new().spacing(6), |r, topic| r.push(badge(topic, Tone::Muted))),
            ]
            .spacing(10),
        ))
    })
}

fn instructor(course: &Course) -> Column<'_, Message> {
    let profile = data::get_instructor_profile(&course.instructor);
    let bio = profile
        .as_ref()
        .map_or_else(|| format!("{} teaches {} on EduPlatform.", course.instructor, course.category), |p| p.bio.clone());
    let mut facts = Row::new().spacing(24);
    if let Some(p) = &profile {
        facts = facts
            .push(stars(p.rating))
            .push(text(format!("{} students", grouped(p.students))).size(14))
            .push(text(format!("{} courses", p.courses)).size(14));
    }
    column![card(
        row![
            avatar(&course.instructor, 80.0),
            column![text(&course.instructor).size(22), text(bio).style(text::secondary), facts]
                .spacing(8),
        ]
        .spacing(20)
        .align_y(Alignment::Center),
    )]
}

fn reviews(details: Option<&CourseDetails>) -> Column<'static, Message> {
    let Some(details) = details else {
        return column![text("No reviews yet.").style(text::secondary)];
    };
    details.reviews_list.iter().fold(Column::new().spacing(12), |c, review| {
        c.push(card(
            column![
                row![
                    avatar(&review.name, 40.0),
                    column![text(review.name.clone()), stars(f32::from(review.rating))],
                    horizontal_space(),
                    text(review.date.clone()).size(14).style(text::secondary),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
                text(review.content.clone()),
            ]
            .spacing(10),
        ))
    })
}

fn price_card(course: &Course, details: Option<&CourseDetails>) -> Container<'static, Message> {
    let mut price = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(text(format!("${}", course.price)).size(32));
    if let Some(details) = details {
        price = price.push(text(format!("${}", details.original_price)).style(text::secondary));
        if let Some(off) = details.discount_percent(course.price) {
            price = price.push(badge(format!("{}% off", off), Tone::Destructive));
        }
    }
    card(
        column![
            price,
            button("Enroll Now").on_press(Message::NoOp).width(Length::Fill).padding(12),
            button("Free Consultation")
                .on_press(Message::Navigate(Route::Consultation))
                .style(button::secondary)
                .width(Length::Fill)
                .padding(12),
            horizontal_rule(1),
            label_value("Duration", course.duration.clone()),
            label_value("Level", &course.level),
            label_value("Students", grouped(course.students)),
            label_value("Certificate", "Included"),
            label_value("Access", "Lifetime"),
        ]
        .spacing(12),
    )
}

pub fn course_details_screen(app: &App, course_id: u32) -> Container<'_, Message> {
    let Some(course) = app.displayed_course(course_id) else {
        return Container::new(text("Course not found")).padding(40);
    };
    let details = app.displayed_course_details(course_id);
    let details = details.as_ref();

    let mut tags = course
        .tags
        .iter()
        .fold(Row::new().spacing(6), |r, tag| r.push(badge(tag, Tone::Muted)));
    if let Some(d) = details {
        for tag in &d.extra_tags {
            tags = tags.push(badge(tag, Tone::Muted));
        }
    }

    let header = column![
        button(row![muted_icon("arrow-left", 12.0), text("Back to Courses")].spacing(6))
            .on_press(Message::Navigate(Route::Courses))
            .style(button::text),
        row![badge(&course.level, course.level.tone()), badge(&course.category, Tone::Muted)].spacing(8),
        text(&course.title).size(36),
        text(&course.description).size(18).style(text::secondary),
        row![
            stars(course.rating),
            text(match details {
                Some(d) => format!("({} reviews)", d.reviews),
                None => String::new(),
            })
            .size(14),
            row![muted_icon("users", 13.0), text(format!("{} students", grouped(course.students))).size(14)].spacing(4),
            row![muted_icon("clock", 13.0), text(&course.duration).size(14)].spacing(4),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
        text(format!("Instructor: {}", course.instructor)),
        tags,
    ]
    .spacing(12);

    let tab_body: Element<Message> = match app.details_tab {
        DetailsTab::Overview => overview(course, details).into(),
        DetailsTab::Curriculum => curriculum(details).into(),
        DetailsTab::Instructor => instructor(course).into(),
        DetailsTab::Reviews => reviews(details).into(),
    };

    let main = column![tab_bar(app.details_tab), tab_body].spacing(16);
    let side = column![
        price_card(course, details),
        card(column![card_title("calendar", "Need guidance?"), text("Book a one-on-one session with an expert before you enroll.").style(text::secondary)].spacing(8)),
    ]
    .spacing(16);

    let body: Element<Message> = if app.is_compact() {
        column![side, main].spacing(20).into()
    } else {
        row![main.width(Length::FillPortion(2)), side.width(Length::FillPortion(1))]
            .spacing(24)
            .into()
    };

    Container::new(column![header, body].spacing(28))
        .width(Length::Fill)
        .padding(40)
}
