//! Login / sign-up card.
//!
//! One card serves both modes; sign-up only adds the name field. Submission
//! is disabled while the mock verifier is running, and the only user-facing
//! error in the application renders inline below the inputs.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::{LoginMessage, Message};
use crate::state::{LoginMode, LoginUi};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, button_primary, card_container,
    secondary_text, text_input_default,
};

/// Render the login view.
pub fn view_login<'a>(login: &'a LoginUi) -> Element<'a, Message> {
    let card = container(view_card_content(login))
        .padding(SPACING_LG)
        .width(Length::Fixed(420.0))
        .style(card_container);

    let back = button(
        row![lucide::arrow_left().size(14), text("Back to Home").size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Login(LoginMessage::BackClicked))
    .padding([8.0, 16.0])
    .style(button_ghost);

    container(
        column![card, Space::new().height(SPACING_MD), back].align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Shrink)
    .center_y(Length::Shrink)
    .into()
}

/// The card body: heading, inputs, error, submit, and mode toggle.
fn view_card_content<'a>(login: &'a LoginUi) -> Element<'a, Message> {
    let heading = column![
        text(login.mode.card_title()).size(22),
        Space::new().height(SPACING_XS),
        text(login.mode.card_subtitle()).size(13).style(secondary_text),
    ]
    .align_x(Alignment::Center);

    let mut inputs = column![].spacing(SPACING_MD);

    if login.mode == LoginMode::SignUp {
        inputs = inputs.push(
            text_input("Full Name", &login.name)
                .on_input(|value| Message::Login(LoginMessage::NameChanged(value)))
                .padding(SPACING_SM)
                .style(text_input_default),
        );
    }

    inputs = inputs.push(
        text_input("Email", &login.email)
            .on_input(|value| Message::Login(LoginMessage::EmailChanged(value)))
            .padding(SPACING_SM)
            .style(text_input_default),
    );

    inputs = inputs.push(
        text_input("Password", &login.password)
            .secure(true)
            .on_input(|value| Message::Login(LoginMessage::PasswordChanged(value)))
            .on_submit(Message::Login(LoginMessage::SubmitClicked))
            .padding(SPACING_SM)
            .style(text_input_default),
    );

    let mut body = column![
        container(heading).width(Length::Fill).center_x(Length::Shrink),
        Space::new().height(SPACING_LG),
        inputs,
    ];

    if let Some(error) = &login.error {
        let danger = |theme: &iced::Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        };
        body = body.push(Space::new().height(SPACING_SM)).push(
            row![
                lucide::circle_alert().size(13),
                text(error.to_string()).size(13).style(danger),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        );
    }

    let submit_label: Element<'a, Message> = if login.is_submitting() {
        row![
            lucide::loader().size(14),
            text("Please wait...").size(14),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
    } else {
        text(login.mode.submit_label()).size(14).into()
    };

    let mut submit = button(submit_label)
        .padding([10.0, 24.0])
        .width(Length::Fill)
        .style(button_primary);
    if !login.is_submitting() {
        submit = submit.on_press(Message::Login(LoginMessage::SubmitClicked));
    }

    let toggle = button(text(login.mode.toggle_prompt()).size(13))
        .on_press(Message::Login(LoginMessage::ModeToggled))
        .padding([6.0, 12.0])
        .style(button_ghost);

    body.push(Space::new().height(SPACING_LG))
        .push(submit)
        .push(Space::new().height(SPACING_SM))
        .push(
            container(toggle)
                .width(Length::Fill)
                .center_x(Length::Shrink),
        )
        .into()
}
