use crate::models::{Friend, Ootd};
use chrono::{DateTime, NaiveDate, Utc};

pub const CURRENT_USER_ID: &str = "current-user";

pub fn current_user() -> Friend {
    Friend {
        id: CURRENT_USER_ID.to_string(),
        name: "Jacqueline Flynn".to_string(),
        username: "jacqfly".to_string(),
        avatar: "assets/images/image.png".to_string(),
        is_online: true,
    }
}

pub fn friends() -> Vec<Friend> {
    vec![
        Friend {
            id: "1".to_string(),
            name: "Maya Chen".to_string(),
            username: "mayac".to_string(),
            avatar: "assets/images/avatars/1.png".to_string(),
            is_online: true,
        },
        Friend {
            id: "2".to_string(),
            name: "Leo Park".to_string(),
            username: "leopark".to_string(),
            avatar: "assets/images/avatars/2.png".to_string(),
            is_online: false,
        },
        Friend {
            id: "3".to_string(),
            name: "Sofia Reyes".to_string(),
            username: "sofiar".to_string(),
            avatar: "assets/images/avatars/3.png".to_string(),
            is_online: true,
        },
    ]
}

struct Sample {
    id: &'static str,
    user_id: &'static str,
    picture: u8,
    date: (i32, u32, u32),
    created_at: &'static str,
    tags: &'static [&'static str],
    is_private: bool,
    likes: u32,
    is_liked: bool,
}

fn build(sample: &Sample) -> Option<Ootd> {
    let image = format!("assets/images/pics/Rectangle {}.png", sample.picture);
    let (y, m, d) = sample.date;

    Some(Ootd {
        id: sample.id.to_string(),
        user_id: sample.user_id.to_string(),
        cutout_image_uri: Some(image.clone()),
        image_uri: image,
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        created_at: DateTime::parse_from_rfc3339(sample.created_at)
            .ok()?
            .with_timezone(&Utc),
        occasion: None,
        weather: None,
        tags: if sample.tags.is_empty() {
            None
        } else {
            Some(sample.tags.iter().map(|t| t.to_string()).collect())
        },
        is_private: sample.is_private,
        likes: sample.likes,
        is_liked: sample.is_liked,
    })
}

const USER_SAMPLES: [Sample; 3] = [
    Sample {
        id: "ootd-1",
        user_id: CURRENT_USER_ID,
        picture: 1,
        date: (2025, 1, 10),
        created_at: "2025-01-10T08:30:00Z",
        tags: &["experimental", "simple", "casual"],
        is_private: false,
        likes: 12,
        is_liked: false,
    },
    Sample {
        id: "ootd-2",
        user_id: CURRENT_USER_ID,
        picture: 2,
        date: (2025, 1, 9),
        created_at: "2025-01-09T14:20:00Z",
        tags: &["minimal", "simple", "elegant"],
        is_private: false,
        likes: 8,
        is_liked: true,
    },
    Sample {
        id: "ootd-3",
        user_id: CURRENT_USER_ID,
        picture: 3,
        date: (2025, 1, 8),
        created_at: "2025-01-08T10:15:00Z",
        tags: &["experimental", "minimal", "chic"],
        is_private: true,
        likes: 15,
        is_liked: false,
    },
];

const FRIEND_SAMPLES: [Sample; 3] = [
    Sample {
        id: "friend-ootd-1",
        user_id: "1",
        picture: 1,
        date: (2025, 1, 10),
        created_at: "2025-01-10T16:45:00Z",
        tags: &[],
        is_private: false,
        likes: 23,
        is_liked: true,
    },
    Sample {
        id: "friend-ootd-2",
        user_id: "2",
        picture: 2,
        date: (2025, 1, 9),
        created_at: "2025-01-09T12:00:00Z",
        tags: &[],
        is_private: false,
        likes: 19,
        is_liked: false,
    },
    Sample {
        id: "friend-ootd-3",
        user_id: "3",
        picture: 3,
        date: (2025, 1, 7),
        created_at: "2025-01-07T09:30:00Z",
        tags: &[],
        is_private: false,
        likes: 7,
        is_liked: false,
    },
];

pub fn user_ootds() -> Vec<Ootd> {
    USER_SAMPLES.iter().filter_map(build).collect()
}

pub fn friends_ootds() -> Vec<Ootd> {
    FRIEND_SAMPLES.iter().filter_map(build).collect()
}
