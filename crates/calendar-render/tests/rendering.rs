use calendar_render::{
    convert, render, render_ymd, resolve_era, CalendarDate, CalendarKind, RenderError,
    RenderOptions, RenderStyle, JAPANESE_ERAS,
};

fn verbose(y: i32, m: u32, d: u32, calendar: &str) -> String {
    let date = CalendarDate::new(y, m, d).unwrap();
    render(&date, &RenderOptions::from_names("gce-verbose", calendar))
}

fn styled(y: i32, m: u32, d: u32, style: &str) -> String {
    let date = CalendarDate::new(y, m, d).unwrap();
    render(&date, &RenderOptions::from_names(style, "gregorian"))
}

#[test]
fn machine_styles_for_tuesday_2025_09_09() {
    assert_eq!(styled(2025, 9, 9, "iso-date"), "2025-09-09");
    assert_eq!(styled(2025, 9, 9, "iso-week"), "2025-W37-2");
    assert_eq!(styled(2025, 9, 9, "rfc3339"), "2025-09-09T00:00:00Z");
    assert_eq!(styled(2025, 9, 9, "unix"), "1757376000");
}

#[test]
fn unix_style_around_epoch() {
    assert_eq!(styled(1970, 1, 1, "unix"), "0");
    assert_eq!(styled(1969, 12, 31, "unix"), "-86400");
    assert_eq!(styled(1970, 1, 2, "unix"), "86400");
}

#[test]
fn every_calendar_for_2025_09_09() {
    let expected = [
        ("gregorian", "Tuesday, September 9th of the year 2025 of the common era"),
        ("julian", "Tuesday, August 27th of the year 2025 of the Julian calendar"),
        ("buddhist", "Tuesday, September 9th of the year 2568 of the Buddhist Era"),
        ("minguo", "Tuesday, September 9th of the year 114 of the Minguo calendar"),
        ("japanese", "Tuesday, September 9th in Reiwa 7 of the Japanese calendar"),
        (
            "islamic",
            "Tuesday, Rabi' al-awwal 16th in year 1447 AH of the Islamic (Hijri) calendar (tabular approximation)",
        ),
        (
            "hebrew",
            "Tuesday, September 9th in year 5785 AM of the Hebrew calendar (tabular approximation)",
        ),
    ];
    for (calendar, sentence) in expected {
        assert_eq!(verbose(2025, 9, 9, calendar), sentence, "calendar {calendar}");
    }
}

#[test]
fn japanese_era_boundaries() {
    let era = |y, m, d| {
        let c = convert(&CalendarDate::new(y, m, d).unwrap(), CalendarKind::Japanese);
        format!("{} {}", c.era.unwrap(), c.year)
    };
    assert_eq!(era(1989, 1, 7), "Showa 64");
    assert_eq!(era(1989, 1, 8), "Heisei 1");
    assert_eq!(era(2019, 4, 30), "Heisei 31");
    assert_eq!(era(2019, 5, 1), "Reiwa 1");
}

#[test]
fn japanese_sentence_at_boundaries() {
    assert_eq!(
        verbose(1989, 1, 8, "japanese"),
        "Sunday, January 8th in Heisei 1 of the Japanese calendar"
    );
    assert_eq!(
        verbose(2019, 4, 30, "japanese"),
        "Tuesday, April 30th in Heisei 31 of the Japanese calendar"
    );
}

#[test]
fn hebrew_threshold_on_september_20() {
    let year = |d| convert(&CalendarDate::new(2024, 9, d).unwrap(), CalendarKind::Hebrew).year;
    assert_eq!(year(19), 2024 + 3760);
    assert_eq!(year(20), 2024 + 3761);
}

#[test]
fn gregorian_reform_day_in_julian() {
    assert_eq!(
        verbose(1582, 10, 15, "julian"),
        "Friday, October 5th of the year 1582 of the Julian calendar"
    );
}

#[test]
fn unknown_names_fall_back_to_defaults() {
    // Documented behaviour: unsupported names are not an error.
    assert_eq!(
        verbose(2025, 9, 9, "aztec"),
        verbose(2025, 9, 9, "gregorian")
    );
    let date = CalendarDate::new(2025, 9, 9).unwrap();
    assert_eq!(
        render(&date, &RenderOptions::from_names("no-such-style", "buddhist")),
        "Tuesday, September 9th of the year 2568 of the Buddhist Era"
    );
}

#[test]
fn strict_parsing_is_available_to_callers() {
    assert!(matches!(
        "aztec".parse::<CalendarKind>(),
        Err(RenderError::UnknownCalendar(_))
    ));
    assert!(matches!(
        "short".parse::<RenderStyle>(),
        Err(RenderError::UnknownStyle(_))
    ));
}

#[test]
fn invalid_dates_are_errors_not_clamped() {
    let options = RenderOptions::default();
    assert_eq!(
        render_ymd(2023, 2, 29, &options).unwrap_err(),
        RenderError::InvalidDay {
            year: 2023,
            month: 2,
            day: 29,
            max_day: 28
        }
    );
    assert!(render_ymd(2024, 2, 29, &options).is_ok());
    assert!(render_ymd(2024, 0, 10, &options).is_err());
}

#[test]
fn negative_years_render() {
    assert_eq!(styled(-44, 3, 15, "iso-date"), "-0044-03-15");
    let sentence = verbose(-44, 3, 15, "julian");
    assert!(sentence.ends_with("of the year -44 of the Julian calendar"), "{sentence}");
}

#[test]
fn converted_date_serializes_to_json() {
    let date = CalendarDate::new(2025, 9, 9).unwrap();
    let value = serde_json::to_value(convert(&date, CalendarKind::Japanese)).unwrap();
    assert_eq!(value["calendar"], "japanese");
    assert_eq!(value["era"], "Reiwa");
    assert_eq!(value["year"], 7);
    assert_eq!(value["month_name"], "September");

    let gregorian = serde_json::to_value(convert(&date, CalendarKind::Gregorian)).unwrap();
    assert!(gregorian.get("era").is_none());
}

#[test]
fn options_serialize_with_configuration_names() {
    let options = RenderOptions::from_names("iso-week", "minguo");
    assert_eq!(
        serde_json::to_value(&options).unwrap(),
        serde_json::json!({ "style": "iso-week", "calendar": "minguo" })
    );

    let framed = RenderOptions::default().with_lead_in("Made on");
    assert_eq!(
        serde_json::to_value(&framed).unwrap(),
        serde_json::json!({ "style": "gce-verbose", "calendar": "gregorian", "lead_in": "Made on" })
    );
}

#[test]
fn era_records_serialize_to_json() {
    let reiwa = serde_json::to_value(JAPANESE_ERAS[0]).unwrap();
    assert_eq!(
        reiwa,
        serde_json::json!({ "name": "Reiwa", "start_year": 2019, "start_month": 5, "start_day": 1 })
    );

    let date = CalendarDate::new(1989, 1, 7).unwrap();
    assert_eq!(
        serde_json::to_value(resolve_era(&date)).unwrap(),
        serde_json::json!({ "name": "Showa", "year": 64 })
    );
}

#[test]
fn julian_day_serializes_as_bare_number() {
    let jd = CalendarDate::new(2025, 9, 9).unwrap().julian_day();
    assert_eq!(serde_json::to_value(jd).unwrap(), serde_json::json!(2_460_928));
    assert_eq!(jd.to_string(), "JD 2460928");
}

#[test]
fn options_are_shared_across_threads() {
    let options = RenderOptions::from_names("gce-verbose", "minguo");
    let date = CalendarDate::new(2025, 9, 9).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| render(&date, &options)))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                "Tuesday, September 9th of the year 114 of the Minguo calendar"
            );
        }
    });
}
