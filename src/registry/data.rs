//! Built-in registry data.
//!
//! The portfolio content itself. New projects are added here and show up in
//! the galleries automatically.

use super::record::ContentRecord;

/// All graphics design projects, in display order
pub fn graphics_projects() -> Vec<ContentRecord> {
    vec![
        ContentRecord::graphics(
            "creative-graphics-1",
            "Creative Graphics Design",
            "Professional graphic design showcasing creative visual communication and brand identity.",
            "Graphics Design",
            "https://ik.imagekit.io/storm5615/g2.png?updatedAt=1748375589683",
        )
        .with_tags(["Graphic Design", "Visual Identity", "Creative Design"]),
        ContentRecord::graphics(
            "creative-graphics-2",
            "Creative Graphics Design",
            "Professional graphic design showcasing creative visual communication and brand identity.",
            "Graphics Design",
            "https://ik.imagekit.io/storm5615/g7.png?updatedAt=1748375604606",
        )
        .with_tags(["Graphic Design", "Visual Identity", "Creative Design"]),
    ]
}

/// All video projects, in display order
pub fn video_projects() -> Vec<ContentRecord> {
    vec![
        ContentRecord::video(
            "brand-video",
            "Brand Video Production",
            "A promotional advertisement video edit for the opening of a new cinema",
            "Advertisement",
            "https://ik.imagekit.io/storm5615/video%20editing%201.mp4?updatedAt=1748376389164",
        )
        .with_tags(["Video Editing", "Motion Graphics", "After Effects"])
        .with_video_details(
            "https://ik.imagekit.io/storm5615/brave_screenshot_imagekit.io.png?updatedAt=1756904043041",
            "2:45",
            "45MB",
        ),
        ContentRecord::video(
            "youtube-shorts-1",
            "YouTube Shorts Video 1",
            "Creative short-form video content optimized for YouTube Shorts format",
            "YouTube Shorts",
            "https://ik.imagekit.io/storm5615/SnapTik-dot-Kim-39ff5f825fcf6fd85ba97bc02e93a881.mp4?updatedAt=1756914959376",
        )
        .with_tags(["YouTube Shorts", "Short Form", "Social Media"])
        .with_video_details(
            "https://ik.imagekit.io/storm5615/brave_screenshot_imagekit.io%20(3).png?updatedAt=1756915390180",
            "0:30",
            "15MB",
        ),
        ContentRecord::video(
            "tiktok-video",
            "TikTok Content",
            "Creative short-form video content optimized for TikTok platform and viral engagement",
            "TikTok",
            "https://ik.imagekit.io/storm5615/SnapTik-dot-Kim-fa61a25584d05ab13cb88c24fb47707e.mp4?updatedAt=1756914959149",
        )
        .with_tags(["TikTok", "Short Form", "Viral Content"])
        .with_video_details(
            "https://ik.imagekit.io/storm5615/brave_screenshot_imagekit.io%20(2).png?updatedAt=1756915390306",
            "0:30",
            "15MB",
        ),
    ]
}
