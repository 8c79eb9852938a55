//! Candidate URLs for the reveal video, tried in priority order by the
//! fallback state machine. Two mirrors of the hosted clip, with the
//! canonical YouTube upload as a last resort.

pub const VIDEO_SOURCES: [&str; 3] = [
    "https://raw.githubusercontent.com/vaibhavmule/anime/main/video.mp4",
    "https://github.com/vaibhavmule/anime/raw/main/video.mp4",
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
];
