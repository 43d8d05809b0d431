use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationReason, validate_holes};

/// Hole number within a round (1-based).
pub type HoleNumber = u8;

/// One hole of the round's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub number: HoleNumber,
    /// Par for the hole (3, 4, or 5).
    pub par: u8,
    /// Difficulty rank, 1 = hardest. Voor strokes land on low indexes first.
    pub stroke_index: u8,
}

impl HoleSpec {
    pub const fn new(number: HoleNumber, par: u8, stroke_index: u8) -> Self {
        Self {
            number,
            par,
            stroke_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseKind {
    NineHole,
    EighteenHole,
}

/// A named hole layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub holes: Vec<HoleSpec>,
}

impl Course {
    /// Build a course from parallel par and stroke-index lists, numbering
    /// holes from 1.
    pub fn from_layout(name: impl Into<String>, pars: &[u8], stroke_indexes: &[u8]) -> Self {
        let holes = pars
            .iter()
            .zip(stroke_indexes)
            .enumerate()
            .map(|(i, (&par, &si))| HoleSpec::new(i as HoleNumber + 1, par, si))
            .collect();
        Self {
            name: name.into(),
            holes,
        }
    }

    /// A course where every hole has the same par and the stroke index
    /// equals the hole number.
    pub fn flat(name: impl Into<String>, hole_count: u8, par: u8) -> Self {
        Self {
            name: name.into(),
            holes: (1..=hole_count).map(|n| HoleSpec::new(n, par, n)).collect(),
        }
    }

    /// Parse a custom course from TOML (`name` plus a `[[holes]]` array).
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn kind(&self) -> Option<CourseKind> {
        match self.holes.len() {
            9 => Some(CourseKind::NineHole),
            18 => Some(CourseKind::EighteenHole),
            _ => None,
        }
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }

    pub fn hole(&self, number: HoleNumber) -> Option<&HoleSpec> {
        self.holes.iter().find(|h| h.number == number)
    }
}

/// Display label for the nine a hole belongs to.
pub fn nine_label(number: HoleNumber) -> &'static str {
    match number {
        1..=9 => "Front 9",
        10..=18 => "Back 9",
        _ => "Unknown",
    }
}

/// Join two 9-hole courses into one 18-hole round. The back nine is
/// renumbered 10..18 and its stroke indexes are shifted by 9, so the front
/// nine keeps the hardest indexes. Each nine must be a valid layout on its
/// own; the first problem found is reported under `front.` or `back.`.
pub fn combine_nines(front: &Course, back: &Course) -> Result<Course, ValidationError> {
    for (field, course) in [("front", front), ("back", back)] {
        if course.kind() != Some(CourseKind::NineHole) {
            return Err(ValidationError::new(
                field,
                ValidationReason::NotNineHoles {
                    found: course.holes.len(),
                },
            ));
        }
        if let Err(errors) = validate_holes(&course.holes)
            && let Some(first) = errors.into_iter().next()
        {
            return Err(ValidationError::new(
                format!("{field}.{}", first.field),
                first.reason,
            ));
        }
    }
    if front == back {
        return Err(ValidationError::new(
            "back",
            ValidationReason::SameCourseTwice,
        ));
    }

    let mut holes: Vec<HoleSpec> = front.holes.clone();
    holes.sort_by_key(|h| h.number);
    let mut back_holes = back.holes.clone();
    back_holes.sort_by_key(|h| h.number);
    holes.extend(back_holes.iter().enumerate().map(|(i, h)| {
        HoleSpec::new(10 + i as HoleNumber, h.par, h.stroke_index + 9)
    }));

    Ok(Course {
        name: format!("{} + {}", front.name, back.name),
        holes,
    })
}

/// Par 72 with the conventional odd/even stroke index split. Hole 18 is a
/// par 5 so the total matches the name.
pub fn standard_course() -> Course {
    Course::from_layout(
        "Standard Par 72",
        &[4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 4, 3, 5, 4, 4, 3, 5],
        &[1, 11, 5, 15, 3, 13, 7, 17, 9, 2, 12, 6, 16, 4, 14, 8, 18, 10],
    )
}

/// Short course with alternating par 3s and 4s.
pub fn executive_course() -> Course {
    Course::from_layout(
        "Executive Course",
        &[4, 3, 4, 3, 4, 3, 5, 4, 3, 4, 3, 4, 3, 5, 3, 4, 4, 3],
        &[1, 7, 3, 13, 5, 15, 9, 11, 17, 2, 8, 4, 14, 6, 16, 10, 12, 18],
    )
}

pub fn championship_course() -> Course {
    Course::from_layout(
        "Championship Course",
        &[4, 5, 3, 4, 4, 4, 3, 5, 4, 4, 5, 3, 4, 4, 4, 3, 5, 4],
        &[5, 3, 15, 1, 9, 11, 17, 7, 13, 6, 4, 16, 2, 10, 12, 18, 8, 14],
    )
}

/// Built-in layouts keyed by short name.
pub fn presets() -> Vec<(&'static str, Course)> {
    vec![
        ("standard", standard_course()),
        ("executive", executive_course()),
        ("championship", championship_course()),
    ]
}

pub fn preset(key: &str) -> Option<Course> {
    presets()
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, course)| course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn preset_pars() {
        assert_eq!(standard_course().total_par(), 72);
        assert_eq!(executive_course().total_par(), 66);
        assert_eq!(championship_course().total_par(), 72);
    }

    #[test]
    fn all_presets_are_valid() {
        for (key, course) in presets() {
            assert_eq!(course.kind(), Some(CourseKind::EighteenHole), "{key}");
            assert!(validate_holes(&course.holes).is_ok(), "{key} should validate");
        }
    }

    #[test]
    fn presets_have_unique_names() {
        let all = presets();
        let names: HashSet<&str> = all.iter().map(|(_, c)| c.name.as_str()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn preset_lookup_is_case_insensitive() {
        assert_eq!(preset("Executive").unwrap().name, "Executive Course");
        assert!(preset("links").is_none());
    }

    #[test]
    fn combine_nines_offsets_back_stroke_indexes() {
        let front = Course::from_layout("Red", &[4; 9], &[1, 3, 5, 7, 9, 2, 4, 6, 8]);
        let back = Course::from_layout("Blue", &[3; 9], &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let combined = combine_nines(&front, &back).unwrap();

        assert_eq!(combined.name, "Red + Blue");
        assert_eq!(combined.holes.len(), 18);
        assert_eq!(combined.holes[9], HoleSpec::new(10, 3, 18));
        assert_eq!(combined.holes[17], HoleSpec::new(18, 3, 10));
        assert_eq!(combined.total_par(), 36 + 27);
        assert!(validate_holes(&combined.holes).is_ok());
    }

    #[test]
    fn combine_nines_rejects_eighteen() {
        let nine = Course::flat("Nine", 9, 4);
        let err = combine_nines(&standard_course(), &nine).unwrap_err();
        assert_eq!(err.field, "front");
        assert_eq!(err.reason, ValidationReason::NotNineHoles { found: 18 });
    }

    #[test]
    fn combine_nines_rejects_bad_stroke_index_on_a_nine() {
        let front = Course::flat("North", 9, 4);
        let back = Course::from_layout("South", &[4; 9], &[250, 1, 2, 3, 4, 5, 6, 7, 8]);
        let err = combine_nines(&front, &back).unwrap_err();
        assert_eq!(err.field, "back.holes.stroke_index");
        assert_eq!(err.reason, ValidationReason::StrokeIndexes { count: 9 });
    }

    #[test]
    fn combine_nines_rejects_bad_par_on_a_nine() {
        let front = Course::from_layout(
            "North",
            &[4, 4, 4, 4, 6, 4, 4, 4, 4],
            &[1, 2, 3, 4, 5, 6, 7, 8, 9],
        );
        let err = combine_nines(&front, &Course::flat("South", 9, 4)).unwrap_err();
        assert_eq!(err.field, "front.holes[4].par");
        assert_eq!(err.reason, ValidationReason::ParOutOfRange { found: 6 });
    }

    #[test]
    fn combine_nines_rejects_same_course() {
        let nine = Course::flat("Nine", 9, 4);
        let err = combine_nines(&nine, &nine).unwrap_err();
        assert_eq!(err.reason, ValidationReason::SameCourseTwice);
    }

    #[test]
    fn nine_labels() {
        assert_eq!(nine_label(1), "Front 9");
        assert_eq!(nine_label(9), "Front 9");
        assert_eq!(nine_label(10), "Back 9");
        assert_eq!(nine_label(19), "Unknown");
    }

    #[test]
    fn parse_course_toml() {
        let toml_str = r#"
name = "Pitch and Putt"

[[holes]]
number = 1
par = 3
stroke_index = 2

[[holes]]
number = 2
par = 4
stroke_index = 1
"#;
        let course = Course::from_toml_str(toml_str).unwrap();
        assert_eq!(course.name, "Pitch and Putt");
        assert_eq!(course.holes.len(), 2);
        assert_eq!(course.hole(2).unwrap().stroke_index, 1);
        assert_eq!(course.kind(), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn stroke_indexes() -> impl Strategy<Value = Vec<u8>> {
            Just((1..=9).collect::<Vec<u8>>()).prop_shuffle()
        }

        proptest! {
            #[test]
            fn any_index_order_makes_a_valid_nine(
                indexes in stroke_indexes(),
                pars in proptest::collection::vec(3u8..=5, 9),
            ) {
                let nine = Course::from_layout("Nine", &pars, &indexes);
                prop_assert!(validate_holes(&nine.holes).is_ok());
            }

            #[test]
            fn two_valid_nines_make_a_valid_eighteen(
                front_indexes in stroke_indexes(),
                back_indexes in stroke_indexes(),
                pars in proptest::collection::vec(3u8..=5, 9),
            ) {
                let front = Course::from_layout("Front", &pars, &front_indexes);
                let back = Course::from_layout("Back", &[4; 9], &back_indexes);
                let combined = combine_nines(&front, &back).unwrap();

                prop_assert_eq!(combined.kind(), Some(CourseKind::EighteenHole));
                prop_assert!(validate_holes(&combined.holes).is_ok());
                for hole in &combined.holes[..9] {
                    prop_assert!(hole.stroke_index <= 9);
                }
                prop_assert_eq!(
                    combined.total_par(),
                    front.total_par() + back.total_par()
                );
            }
        }
    }
}
