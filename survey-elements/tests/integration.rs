//! Integration tests for survey-elements

use example_surveys::{
    COMMENT, DONATION, EXPERIENCE, FEEDBACK_JSON, SATISFACTION, SCREENSHOT, customer_feedback,
    donation,
};
use survey_elements::{
    ElementBody, ElementEvent, ElementId, ManualClock, PAYMENT_COMPLETED, Progress, ScaleFace,
    ScaleSummary, ScriptedRespondent, SessionError, SessionOptions, SessionSnapshot, Smiley,
    SmileyFill, SurveyDefinition, SurveySession, VisitState,
};

fn id(s: &str) -> ElementId {
    ElementId::new(s)
}

#[test]
fn test_customer_feedback_with_scripted_respondent() {
    let clock = ManualClock::new(1_000);
    let mut respondent = ScriptedRespondent::new()
        .with_clock(clock.clone())
        .with_dwell(SATISFACTION, 2_000)
        .with_selection(SATISFACTION, 4)
        .with_dwell(COMMENT, 1_500)
        .with_input(COMMENT, "Friendly staff")
        .with_dwell(SCREENSHOT, 700);

    let mut session = SurveySession::new(customer_feedback(), SessionOptions::default(), clock);
    let snapshot = session.run(&mut respondent).unwrap();

    assert!(session.is_finished());
    assert_eq!(
        respondent.shown(),
        &[id(SATISFACTION), id(COMMENT), id(SCREENSHOT)]
    );

    assert_eq!(snapshot.responses.get_int(&id(SATISFACTION)).unwrap(), 4);
    assert_eq!(
        snapshot.responses.get_string(&id(COMMENT)).unwrap(),
        "Friendly staff"
    );
    assert!(!snapshot.responses.contains(&id(SCREENSHOT)));

    assert_eq!(snapshot.ttc.get(&id(SATISFACTION)), 2_000);
    assert_eq!(snapshot.ttc.get(&id(COMMENT)), 1_500);
    assert_eq!(snapshot.ttc.get(&id(SCREENSHOT)), 700);
    assert_eq!(snapshot.ttc.total(), 4_200);
}

#[test]
fn test_missing_required_answer_fails_the_run() {
    let clock = ManualClock::new(0);
    let mut respondent = ScriptedRespondent::new().with_clock(clock.clone());
    let mut session = SurveySession::new(donation(), SessionOptions::default(), clock);

    let err = session.run(&mut respondent).unwrap_err();
    assert!(matches!(err, SessionError::Respondent(_)));
    assert!(err.to_string().contains(EXPERIENCE));
    assert_eq!(session.current_element_id(), Some(&id(EXPERIENCE)));
}

#[test]
fn test_donation_payment_is_recorded_once() {
    let clock = ManualClock::new(0);
    let mut session = SurveySession::new(donation(), SessionOptions::default(), clock.clone());
    session.start();

    session.dispatch(ElementEvent::Select(5)).unwrap();
    assert_eq!(session.submit_current().unwrap(), Progress::Next(id(DONATION)));

    let ElementBody::Payment(payment) = session.current_view().unwrap().body else {
        panic!("expected payment view");
    };
    assert_eq!(payment.price, "$25.00");
    assert_eq!(payment.button_label, "Donate");
    assert!(!payment.button_disabled);

    clock.advance(3_000);
    assert!(session.dispatch(ElementEvent::Pay).unwrap().is_some());
    clock.advance(1_000);
    // the button is disabled after paying
    assert!(session.dispatch(ElementEvent::Pay).unwrap().is_none());
    let ElementBody::Payment(payment) = session.current_view().unwrap().body else {
        panic!("expected payment view");
    };
    assert!(payment.button_disabled);

    assert_eq!(session.submit_current().unwrap(), Progress::Finished);
    assert_eq!(
        session.responses().get_string(&id(DONATION)).unwrap(),
        PAYMENT_COMPLETED
    );
    assert_eq!(session.ttc().get(&id(DONATION)), 4_000);
}

#[test]
fn test_revisiting_an_element_accumulates_time() {
    let clock = ManualClock::new(0);
    let mut session =
        SurveySession::new(customer_feedback(), SessionOptions::default(), clock.clone());
    session.start();

    clock.advance(1_000);
    session.dispatch(ElementEvent::Select(2)).unwrap();
    session.submit_current().unwrap();

    clock.advance(500);
    assert_eq!(session.go_back().unwrap(), id(SATISFACTION));
    assert_eq!(session.ttc().get(&id(COMMENT)), 500);

    clock.advance(2_000);
    session.dispatch(ElementEvent::Select(5)).unwrap();
    session.submit_current().unwrap();

    assert_eq!(session.ttc().get(&id(SATISFACTION)), 3_000);
    assert_eq!(session.responses().get_int(&id(SATISFACTION)).unwrap(), 5);
    assert_eq!(session.visit(&id(SATISFACTION)).unwrap().visits(), 2);
}

#[test]
fn test_hidden_page_pauses_the_current_element() {
    let clock = ManualClock::new(0);
    let mut session =
        SurveySession::new(customer_feedback(), SessionOptions::default(), clock.clone());
    session.start();

    clock.advance(1_000);
    session.page_hidden();
    assert_eq!(
        session.visit(&id(SATISFACTION)).unwrap().state(),
        VisitState::Suspended
    );

    clock.advance(60_000);
    session.page_visible();
    clock.advance(500);
    session.dispatch(ElementEvent::Select(3)).unwrap();

    assert_eq!(session.ttc().get(&id(SATISFACTION)), 1_500);
}

#[test]
fn test_snapshot_survives_a_reload() {
    let clock = ManualClock::new(0);
    let mut session =
        SurveySession::new(customer_feedback(), SessionOptions::default(), clock.clone());
    session.start();
    clock.advance(800);
    session.dispatch(ElementEvent::Select(1)).unwrap();

    let json = session.snapshot().to_json().unwrap();
    let snapshot = SessionSnapshot::from_json(&json).unwrap();

    let mut restored = SurveySession::restore(
        customer_feedback(),
        SessionOptions::default(),
        clock.clone(),
        snapshot,
    );
    assert_eq!(restored.start(), Progress::Next(id(COMMENT)));
    clock.advance(200);
    restored.submit_current().unwrap();

    assert_eq!(restored.ttc().get(&id(SATISFACTION)), 800);
    assert_eq!(restored.ttc().get(&id(COMMENT)), 200);
    assert_eq!(restored.responses().get_int(&id(SATISFACTION)).unwrap(), 1);
}

#[test]
fn test_hidden_time_is_not_counted_across_navigation() {
    let clock = ManualClock::new(0);
    let mut session =
        SurveySession::new(customer_feedback(), SessionOptions::default(), clock.clone());
    session.start();

    clock.advance(100);
    session.dispatch(ElementEvent::Select(4)).unwrap();
    session.page_hidden();
    session.submit_current().unwrap();
    assert_eq!(
        session.visit(&id(SATISFACTION)).unwrap().state(),
        VisitState::Submitted
    );
    assert_eq!(
        session.visit(&id(COMMENT)).unwrap().state(),
        VisitState::Idle
    );

    clock.advance(60_000);
    session.page_visible();
    clock.advance(500);
    session.submit_current().unwrap();
    assert_eq!(session.ttc().get(&id(COMMENT)), 500);

    // back from the screenshot to the comment while hidden
    clock.advance(100);
    session.page_hidden();
    assert_eq!(session.go_back().unwrap(), id(COMMENT));
    clock.advance(30_000);
    session.page_visible();
    clock.advance(200);
    session.submit_current().unwrap();

    assert_eq!(session.ttc().get(&id(SATISFACTION)), 100);
    assert_eq!(session.ttc().get(&id(COMMENT)), 700);
    assert_eq!(session.ttc().get(&id(SCREENSHOT)), 100);
    assert_eq!(
        session.visit(&id(COMMENT)).unwrap().state(),
        VisitState::Submitted
    );
}

#[test]
fn test_localized_smiley_view() {
    let clock = ManualClock::new(0);
    let mut session = SurveySession::new(
        customer_feedback(),
        SessionOptions::new().with_language("de"),
        clock,
    );
    session.start();
    session.dispatch(ElementEvent::Select(5)).unwrap();

    let view = session.current_view().unwrap();
    assert_eq!(
        view.header.headline,
        "Wie zufrieden sind Sie mit unserem Service?"
    );
    let ElementBody::OpinionScale(scale) = view.body else {
        panic!("expected opinion scale view");
    };
    assert_eq!(scale.lower_label, "Gar nicht");
    assert_eq!(scale.buttons.len(), 5);

    let last = &scale.buttons[4];
    assert!(last.active);
    assert!(matches!(
        last.face,
        ScaleFace::Smiley {
            smiley: Smiley::GrinningWithSmilingEyes,
            fill: SmileyFill::Strong(_)
        }
    ));
}

#[test]
fn test_definition_from_json() {
    let definition = SurveyDefinition::from_json(FEEDBACK_JSON).unwrap();
    assert_eq!(definition.len(), 2);

    let clock = ManualClock::new(0);
    let mut respondent = ScriptedRespondent::new()
        .with_clock(clock.clone())
        .with_dwell("nps", 4_000)
        .with_selection("nps", 9);
    let mut session = SurveySession::new(definition, SessionOptions::default(), clock);
    let snapshot = session.run(&mut respondent).unwrap();

    assert_eq!(snapshot.ttc.get(&id("nps")), 4_000);

    let summary = ScaleSummary::from_responses(&id("nps"), 10, [&snapshot.responses]);
    assert_eq!(summary.response_count, 1);
    assert_eq!(summary.distribution[&9], 1);
}
