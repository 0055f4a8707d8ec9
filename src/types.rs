// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records we search, and how the matcher sees them.
//!
//! Records are read-only snapshots of what the data layer loaded: videos,
//! courses, teachers, communities, and a user's personal notes. The search
//! core never mutates them; it clones them into a snapshot at build time.
//!
//! Each record type implements [`Searchable`], which pairs it with a field
//! enum. Field access is a `match` on that enum, so a schema can only name
//! fields the record actually has. String paths like `"author.name"` only
//! appear at the configuration boundary, where [`FieldPath::from_path`]
//! turns them into enum values (or an error) once, at build time.
//!
//! | Kind      | Matchable fields (weight)                                   |
//! |-----------|-------------------------------------------------------------|
//! | Video     | title 0.4, description 0.3, tags 0.2, author.name 0.1       |
//! | Course    | title 0.4, description 0.3, tags 0.2, instructor.name 0.1   |
//! | Teacher   | name 0.5, bio 0.3, subjects 0.2                             |
//! | Community | name 0.4, description 0.3, tags 0.3                         |
//! | Note      | title 0.5, content 0.3, tags 0.2                            |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::{
    CommunityFilter, CourseFilter, NoteFilter, RecordFilter, TeacherFilter, VideoFilter,
};

// =============================================================================
// ENTITY KINDS
// =============================================================================

/// Which corpus a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Video,
    Course,
    Teacher,
    Community,
    Note,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Video => "video",
            EntityKind::Course => "course",
            EntityKind::Teacher => "teacher",
            EntityKind::Community => "community",
            EntityKind::Note => "note",
        }
    }

    /// Heading used when results are grouped for display.
    pub fn group_label(self) -> &'static str {
        match self {
            EntityKind::Video => "Videos",
            EntityKind::Course => "Courses",
            EntityKind::Teacher => "Teachers",
            EntityKind::Community => "Communities",
            EntityKind::Note => "Notes",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FIELD ACCESS
// =============================================================================

/// A matchable field value as the matcher sees it.
///
/// Empty strings and empty lists are reported as `Missing`, so "no tags" and
/// "tags: []" score the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Missing,
}

impl<'a> FieldValue<'a> {
    fn text(value: &'a str) -> Self {
        if value.trim().is_empty() {
            FieldValue::Missing
        } else {
            FieldValue::Text(value)
        }
    }

    fn list(values: &'a [String]) -> Self {
        if values.iter().all(|v| v.trim().is_empty()) {
            FieldValue::Missing
        } else {
            FieldValue::List(values)
        }
    }

    fn nested(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::text)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

/// A field enum that can be named by a dotted path in configuration.
pub trait FieldPath: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every field of the record, in schema order.
    const ALL: &'static [Self];

    /// Dotted path, e.g. `"author.name"`.
    fn path(self) -> &'static str;

    /// Inverse of [`FieldPath::path`].
    fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.path() == path)
    }
}

/// A record type the engine can index.
pub trait Searchable: Clone + Send + Sync + 'static {
    type Field: FieldPath;
    type Filter: RecordFilter<Self> + Default + fmt::Debug + Send + Sync;

    const KIND: EntityKind;

    /// Resolve one matchable field.
    fn field(&self, field: Self::Field) -> FieldValue<'_>;

    /// Field weights used when configuration does not override them.
    fn default_weights() -> &'static [(Self::Field, f64)];
}

macro_rules! field_enum {
    ($name:ident { $($variant:ident => $path:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl FieldPath for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn path(self) -> &'static str {
                match self {
                    $($name::$variant => $path),+
                }
            }
        }
    };
}

field_enum!(VideoField {
    Title => "title",
    Description => "description",
    Tags => "tags",
    AuthorName => "author.name",
});

field_enum!(CourseField {
    Title => "title",
    Description => "description",
    Tags => "tags",
    InstructorName => "instructor.name",
});

field_enum!(TeacherField {
    Name => "name",
    Bio => "bio",
    Subjects => "subjects",
});

field_enum!(CommunityField {
    Name => "name",
    Description => "description",
    Tags => "tags",
});

field_enum!(NoteField {
    Title => "title",
    Content => "content",
    Tags => "tags",
});

// =============================================================================
// RECORDS
// =============================================================================

/// Author of a video or instructor of a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: Option<Person>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub duration_secs: Option<u32>,
    pub views: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub instructor: Option<Person>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
}

/// A teacher profile. The data layer calls this corpus `users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub subjects: Vec<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub member_count: u64,
}

/// A personal study note. Per-user, so it never lives in a global index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub video_id: Option<String>,
}

impl Searchable for Video {
    type Field = VideoField;
    type Filter = VideoFilter;

    const KIND: EntityKind = EntityKind::Video;

    fn field(&self, field: VideoField) -> FieldValue<'_> {
        match field {
            VideoField::Title => FieldValue::text(&self.title),
            VideoField::Description => FieldValue::text(&self.description),
            VideoField::Tags => FieldValue::list(&self.tags),
            VideoField::AuthorName => FieldValue::nested(self.author.as_ref().map(|a| a.name.as_str())),
        }
    }

    fn default_weights() -> &'static [(VideoField, f64)] {
        &[
            (VideoField::Title, 0.4),
            (VideoField::Description, 0.3),
            (VideoField::Tags, 0.2),
            (VideoField::AuthorName, 0.1),
        ]
    }
}

impl Searchable for Course {
    type Field = CourseField;
    type Filter = CourseFilter;

    const KIND: EntityKind = EntityKind::Course;

    fn field(&self, field: CourseField) -> FieldValue<'_> {
        match field {
            CourseField::Title => FieldValue::text(&self.title),
            CourseField::Description => FieldValue::text(&self.description),
            CourseField::Tags => FieldValue::list(&self.tags),
            CourseField::InstructorName => {
                FieldValue::nested(self.instructor.as_ref().map(|p| p.name.as_str()))
            }
        }
    }

    fn default_weights() -> &'static [(CourseField, f64)] {
        &[
            (CourseField::Title, 0.4),
            (CourseField::Description, 0.3),
            (CourseField::Tags, 0.2),
            (CourseField::InstructorName, 0.1),
        ]
    }
}

impl Searchable for Teacher {
    type Field = TeacherField;
    type Filter = TeacherFilter;

    const KIND: EntityKind = EntityKind::Teacher;

    fn field(&self, field: TeacherField) -> FieldValue<'_> {
        match field {
            TeacherField::Name => FieldValue::text(&self.name),
            TeacherField::Bio => FieldValue::text(&self.bio),
            TeacherField::Subjects => FieldValue::list(&self.subjects),
        }
    }

    fn default_weights() -> &'static [(TeacherField, f64)] {
        &[
            (TeacherField::Name, 0.5),
            (TeacherField::Bio, 0.3),
            (TeacherField::Subjects, 0.2),
        ]
    }
}

impl Searchable for Community {
    type Field = CommunityField;
    type Filter = CommunityFilter;

    const KIND: EntityKind = EntityKind::Community;

    fn field(&self, field: CommunityField) -> FieldValue<'_> {
        match field {
            CommunityField::Name => FieldValue::text(&self.name),
            CommunityField::Description => FieldValue::text(&self.description),
            CommunityField::Tags => FieldValue::list(&self.tags),
        }
    }

    fn default_weights() -> &'static [(CommunityField, f64)] {
        &[
            (CommunityField::Name, 0.4),
            (CommunityField::Description, 0.3),
            (CommunityField::Tags, 0.3),
        ]
    }
}

impl Searchable for Note {
    type Field = NoteField;
    type Filter = NoteFilter;

    const KIND: EntityKind = EntityKind::Note;

    fn field(&self, field: NoteField) -> FieldValue<'_> {
        match field {
            NoteField::Title => FieldValue::text(&self.title),
            NoteField::Content => FieldValue::text(&self.content),
            NoteField::Tags => FieldValue::list(&self.tags),
        }
    }

    fn default_weights() -> &'static [(NoteField, f64)] {
        &[
            (NoteField::Title, 0.5),
            (NoteField::Content, 0.3),
            (NoteField::Tags, 0.2),
        ]
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A record paired with its match distance. Lower is better; 0 is perfect.
///
/// Serializes as the record's own fields plus `score`, which is what the
/// dropdown and results page render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub record: T,
    pub score: f64,
    /// Index of the record in its corpus snapshot (the stable tie-break).
    #[serde(skip)]
    pub position: usize,
}

/// Everything the header dropdown needs for one query, capped per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalSearchResponse {
    pub videos: Vec<Scored<Video>>,
    pub courses: Vec<Scored<Course>>,
    pub teachers: Vec<Scored<Teacher>>,
    pub communities: Vec<Scored<Community>>,
}

impl GlobalSearchResponse {
    pub fn total(&self) -> usize {
        self.videos.len() + self.courses.len() + self.teachers.len() + self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The initialization payload handed over by the data layer.
///
/// Any omitted list means "empty corpus" for that kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Corpus {
    pub videos: Vec<Video>,
    pub courses: Vec<Course>,
    pub users: Vec<Teacher>,
    pub communities: Vec<Community>,
}
