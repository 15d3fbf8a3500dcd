//! Built-in content records.
//!
//! The agency's production content, checked in as code. Long-form post
//! bodies are kept short here; the head pipeline only consumes titles,
//! excerpts, dates, and images.

use super::types::{
    Author, BlogPost, CaseStudy, PortfolioItem, Review, Service, ServiceCategory, Stat,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).into()).collect()
}

fn case_study(problem: &str, solution: &str, result: &str) -> CaseStudy {
    CaseStudy {
        problem: problem.into(),
        solution: solution.into(),
        result: result.into(),
    }
}

pub(super) fn service_categories() -> Vec<ServiceCategory> {
    [
        ("graphic", "Graphic Design", "ಗ್ರಾಫಿಕ್ ಡಿಸೈನ್", "🎨"),
        ("video", "Video Editing", "ವೀಡಿಯೋ ಎಡಿಟಿಂಗ್", "🎬"),
        ("marketing", "Digital Marketing", "ಡಿಜಿಟಲ್ ಮಾರ್ಕೆಟಿಂಗ್", "📈"),
        ("seo", "SEO & Growth", "SEO & ಗ್ರೋತ್", "🚀"),
        ("academy", "Academy Services", "ಅಕಾಡೆಮಿ ಸೇವೆಗಳು", "🎓"),
        ("technical", "Technical Services", "ತಾಂತ್ರಿಕ ಸೇವೆಗಳು", "⚙"),
        ("content", "Content Services", "ಕಂಟೆಂಟ್ ಸೇವೆಗಳು", "✍"),
    ]
    .into_iter()
    .map(|(id, name, kannada, icon)| ServiceCategory {
        id: id.into(),
        name: name.into(),
        kannada: kannada.into(),
        icon: icon.into(),
    })
    .collect()
}

pub(super) fn services() -> Vec<Service> {
    vec![
        Service {
            id: "youtube-thumbnail".into(),
            name: "YouTube Thumbnail Design".into(),
            kannada: "ಯೂಟ್ಯೂಬ್ ಥಂಬ್ನೈಲ್ ಡಿಸೈನ್".into(),
            category: "graphic".into(),
            icon: "🖼️".into(),
            overview: "Eye-catching YouTube thumbnails that increase click-through rates and help your videos stand out in search results.".into(),
            deliverables: strings(&["High-resolution thumbnail (1280x720)", "Multiple design variations", "Source files", "Quick revisions"]),
            process: strings(&["Analyze video content & target audience", "Design concept creation", "Typography & color optimization", "Final delivery with revisions"]),
            tools: strings(&["Adobe Photoshop", "Canva Pro", "Adobe Illustrator"]),
            case_study: case_study(
                "Educational channel with low CTR (2%) on thumbnails",
                "Created bold, emotion-driven thumbnails with clear text hierarchy",
                "Increased CTR to 8.5% within 30 days",
            ),
            ideal_for: strings(&["YouTubers", "Content Creators", "Educational Channels", "Businesses"]),
        },
        Service {
            id: "social-media-post".into(),
            name: "Social Media Post Design".into(),
            kannada: "ಸೋಷಿಯಲ್ ಮೀಡಿಯಾ ಪೋಸ್ಟ್ ಡಿಸೈನ್".into(),
            category: "graphic".into(),
            icon: "📱".into(),
            overview: "Stunning social media graphics optimized for Instagram, Facebook, LinkedIn, and Twitter that drive engagement.".into(),
            deliverables: strings(&["Platform-optimized designs", "Story & feed formats", "Brand consistency", "Editable templates"]),
            process: strings(&["Brand analysis", "Content calendar planning", "Design creation", "Format optimization"]),
            tools: strings(&["Adobe Photoshop", "Canva", "Figma"]),
            case_study: case_study(
                "Startup with inconsistent brand presence on social media",
                "Created cohesive design system with templates",
                "150% increase in engagement rate",
            ),
            ideal_for: strings(&["Businesses", "Influencers", "Startups", "Agencies"]),
        },
        Service {
            id: "logo-design".into(),
            name: "Logo Design".into(),
            kannada: "ಲೋಗೋ ಡಿಸೈನ್".into(),
            category: "graphic".into(),
            icon: "✨".into(),
            overview: "Unique, memorable logo designs that represent your brand identity and values.".into(),
            deliverables: strings(&["Primary logo", "Logo variations", "Brand guidelines", "All file formats"]),
            process: strings(&["Brand discovery", "Concept sketching", "Digital refinement", "Brand guidelines"]),
            tools: strings(&["Adobe Illustrator", "Figma", "Procreate"]),
            case_study: case_study(
                "New startup needed professional brand identity",
                "Created modern, versatile logo with complete brand kit",
                "Successfully established brand recognition",
            ),
            ideal_for: strings(&["Startups", "Businesses", "Personal Brands"]),
        },
        Service {
            id: "professional-video".into(),
            name: "Professional Video Editing".into(),
            kannada: "ಪ್ರೊಫೆಷನಲ್ ವೀಡಿಯೋ ಎಡಿಟಿಂಗ್".into(),
            category: "video".into(),
            icon: "🎥".into(),
            overview: "High-quality video editing for YouTube, corporate videos, and promotional content.".into(),
            deliverables: strings(&["Edited video", "Color grading", "Sound design", "Multiple formats"]),
            process: strings(&["Footage review", "Story structure", "Editing & effects", "Color & sound"]),
            tools: strings(&["Adobe Premiere Pro", "DaVinci Resolve", "After Effects"]),
            case_study: case_study(
                "YouTube channel with low watch time",
                "Implemented engaging editing style with better pacing",
                "45% increase in average watch time",
            ),
            ideal_for: strings(&["YouTubers", "Businesses", "Content Creators"]),
        },
        Service {
            id: "reels-shorts".into(),
            name: "Reels / Shorts Editing".into(),
            kannada: "ರೀಲ್ಸ್ / ಶಾರ್ಟ್ಸ್ ಎಡಿಟಿಂಗ್".into(),
            category: "video".into(),
            icon: "📲".into(),
            overview: "Trendy short-form video editing optimized for Instagram Reels, YouTube Shorts, and TikTok.".into(),
            deliverables: strings(&["Vertical video format", "Trending effects", "Captions", "Music sync"]),
            process: strings(&["Trend analysis", "Hook creation", "Fast-paced editing", "Platform optimization"]),
            tools: strings(&["CapCut", "Premiere Pro", "After Effects"]),
            case_study: case_study(
                "Brand struggling to gain traction on Reels",
                "Created trend-aligned, fast-paced Reels",
                "500K+ views on multiple Reels",
            ),
            ideal_for: strings(&["Influencers", "Brands", "Creators"]),
        },
        Service {
            id: "social-media-management".into(),
            name: "Social Media Management".into(),
            kannada: "ಸೋಷಿಯಲ್ ಮೀಡಿಯಾ ಮ್ಯಾನೇಜ್\u{200c}ಮೆಂಟ್".into(),
            category: "marketing".into(),
            icon: "📊".into(),
            overview: "Strategic social media management with content planning, creation, and performance optimization.".into(),
            deliverables: strings(&["Content calendar", "Custom content", "Paid strategy", "Monthly reports"]),
            process: strings(&["Brand analysis", "Content planning", "Execution", "Optimization"]),
            tools: strings(&["Sprout Social", "Later", "Canva"]),
            case_study: case_study(
                "E-commerce brand with low social ROI",
                "Created data-driven social strategy",
                "300% increase in social-driven sales",
            ),
            ideal_for: strings(&["E-commerce", "Brands", "Agencies"]),
        },
        Service {
            id: "ad-marketing".into(),
            name: "Ad Marketing".into(),
            kannada: "ಜಾಹೀರಾತು ಮಾರ್ಕೆಟಿಂಗ್".into(),
            category: "marketing".into(),
            icon: "📣".into(),
            overview: "Performance-driven ad campaigns on Facebook, Instagram, Google, and YouTube.".into(),
            deliverables: strings(&["Ad creatives", "Campaign setup", "Audience targeting", "Performance reports"]),
            process: strings(&["Objective setting", "Audience research", "Creative development", "Optimization"]),
            tools: strings(&["Meta Ads", "Google Ads", "Analytics"]),
            case_study: case_study(
                "Coaching institute needing student enrollments",
                "Launched targeted lead generation campaigns",
                "500+ leads at ₹50 per lead",
            ),
            ideal_for: strings(&["Education", "E-commerce", "Services"]),
        },
        Service {
            id: "seo-optimization".into(),
            name: "SEO Optimization".into(),
            kannada: "SEO ಆಪ್ಟಿಮೈಸೇಶನ್".into(),
            category: "seo".into(),
            icon: "🔍".into(),
            overview: "Comprehensive SEO services to improve your website's search engine rankings.".into(),
            deliverables: strings(&["SEO audit", "Keyword strategy", "On-page optimization", "Link building"]),
            process: strings(&["Technical audit", "Keyword research", "Content optimization", "Backlink strategy"]),
            tools: strings(&["SEMrush", "Ahrefs", "Google Search Console"]),
            case_study: case_study(
                "Website with no organic traffic",
                "Implemented full SEO optimization strategy",
                "500% increase in organic traffic in 6 months",
            ),
            ideal_for: strings(&["Businesses", "E-commerce", "Blogs"]),
        },
        Service {
            id: "youtube-seo".into(),
            name: "YouTube SEO".into(),
            kannada: "ಯೂಟ್ಯೂಬ್ SEO".into(),
            category: "seo".into(),
            icon: "📺".into(),
            overview: "Optimize your YouTube videos and channel for maximum visibility and growth.".into(),
            deliverables: strings(&["Keyword research", "Title & description optimization", "Tag strategy", "Thumbnail optimization"]),
            process: strings(&["Channel audit", "Keyword research", "Metadata optimization", "Performance tracking"]),
            tools: strings(&["TubeBuddy", "VidIQ", "YouTube Studio"]),
            case_study: case_study(
                "Educational channel stuck at 10K subscribers",
                "Implemented comprehensive YouTube SEO strategy",
                "Reached 100K subscribers in 8 months",
            ),
            ideal_for: strings(&["YouTubers", "Educators", "Businesses"]),
        },
        Service {
            id: "educational-thumbnails".into(),
            name: "Educational Thumbnails".into(),
            kannada: "ಶಿಕ್ಷಣ ಥಂಬ್ನೈಲ್ ವಿನ್ಯಾಸ".into(),
            category: "academy".into(),
            icon: "🎓".into(),
            overview: "Specialized thumbnail designs for educational content that improve click-through rates.".into(),
            deliverables: strings(&["Subject-specific designs", "Consistent branding", "Bulk packages", "Quick turnaround"]),
            process: strings(&["Subject analysis", "Brand alignment", "Design creation", "Batch delivery"]),
            tools: strings(&["Photoshop", "Canva Pro", "Illustrator"]),
            case_study: case_study(
                "Coaching channel with low video views",
                "Created subject-coded thumbnail system",
                "120% increase in video views",
            ),
            ideal_for: strings(&["Educators", "Coaching Institutes", "Online Teachers"]),
        },
        Service {
            id: "course-promotion".into(),
            name: "Course Promotion Creatives".into(),
            kannada: "ಕೋರ್ಸ್ ಪ್ರೊಮೋಷನ್ ಕ್ರಿಯೇಟಿವ್ಸ್".into(),
            category: "academy".into(),
            icon: "📢".into(),
            overview: "Promotional creatives for course launches, discounts, and enrollment drives.".into(),
            deliverables: strings(&["Launch creatives", "Discount banners", "Feature highlights", "Testimonial cards"]),
            process: strings(&["Course analysis", "USP identification", "Creative development", "Campaign assets"]),
            tools: strings(&["Photoshop", "After Effects", "Canva"]),
            case_study: case_study(
                "Online course with poor enrollment",
                "Created compelling course launch campaign",
                "500+ enrollments in launch week",
            ),
            ideal_for: strings(&["Course Creators", "Ed-tech", "Coaching"]),
        },
        Service {
            id: "studio-setup".into(),
            name: "Studio Setup (Teaching / Podcast)".into(),
            kannada: "ಸ್ಟುಡಿಯೋ ಸೆಟಪ್".into(),
            category: "technical".into(),
            icon: "🎙️".into(),
            overview: "Complete studio setup consultation and implementation for teaching and podcast production.".into(),
            deliverables: strings(&["Equipment list", "Setup guide", "Acoustic treatment plan", "On-site setup"]),
            process: strings(&["Needs assessment", "Budget planning", "Equipment sourcing", "Installation & training"]),
            tools: strings(&["OBS", "Streamlabs", "Audio interfaces"]),
            case_study: case_study(
                "Educator needed professional home studio",
                "Designed and set up budget-friendly studio",
                "Professional quality videos at home",
            ),
            ideal_for: strings(&["Educators", "Podcasters", "Content Creators"]),
        },
        Service {
            id: "app-page-setup".into(),
            name: "App / Page Setup".into(),
            kannada: "ಆಪ್ / ಪೇಜ್ ಸೆಟಪ್".into(),
            category: "technical".into(),
            icon: "📲".into(),
            overview: "Complete setup and optimization of social media pages, business profiles, and apps.".into(),
            deliverables: strings(&["Profile optimization", "Branding setup", "Feature configuration", "Training"]),
            process: strings(&["Platform assessment", "Profile creation", "Optimization", "User training"]),
            tools: strings(&["Meta Business", "Google My Business", "Various platforms"]),
            case_study: case_study(
                "Business with incomplete online presence",
                "Set up and optimized all social profiles",
                "Professional presence across platforms",
            ),
            ideal_for: strings(&["New Businesses", "Startups", "Local Shops"]),
        },
        Service {
            id: "content-writing".into(),
            name: "Content Writing".into(),
            kannada: "ಕಂಟೆಂಟ್ ರೈಟಿಂಗ್".into(),
            category: "content".into(),
            icon: "✍️".into(),
            overview: "SEO-optimized content writing for blogs, websites, and marketing materials.".into(),
            deliverables: strings(&["Blog articles", "Website copy", "Marketing content", "SEO optimization"]),
            process: strings(&["Topic research", "Outline creation", "Content writing", "SEO optimization"]),
            tools: strings(&["Grammarly", "SEMrush", "Google Docs"]),
            case_study: case_study(
                "Website with no organic traffic",
                "Created 50+ SEO-optimized blog posts",
                "10x increase in organic traffic",
            ),
            ideal_for: strings(&["Businesses", "Blogs", "Agencies"]),
        },
        Service {
            id: "script-writing".into(),
            name: "Script Writing".into(),
            kannada: "ಸ್ಕ್ರಿಪ್ಟ್ ರೈಟಿಂಗ್".into(),
            category: "content".into(),
            icon: "🎭".into(),
            overview: "Engaging video scripts for YouTube, ads, and promotional content.".into(),
            deliverables: strings(&["Video scripts", "Ad scripts", "Hooks & CTAs", "Storyboards"]),
            process: strings(&["Brief understanding", "Research", "Script drafting", "Revisions"]),
            tools: strings(&["Final Draft", "Google Docs", "Notion"]),
            case_study: case_study(
                "YouTuber with low viewer retention",
                "Created hook-driven scripts with better pacing",
                "50% improvement in watch time",
            ),
            ideal_for: strings(&["YouTubers", "Advertisers", "Brands"]),
        },
    ]
}

pub(super) fn authors() -> Vec<Author> {
    vec![
        Author {
            id: "1".into(),
            name: "VisionCut Team".into(),
            avatar: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=200&h=200&fit=crop".into(),
            bio: "The creative minds behind VisionCut. We are passionate about digital marketing, design, and helping brands grow in the digital space.".into(),
            expertise: strings(&[
                "Digital Marketing",
                "Graphic Design",
                "SEO",
                "Content Strategy",
            ]),
            instagram: Some("visioncut.2025".into()),
            twitter: Some("visioncut".into()),
            linkedin: Some("visioncut".into()),
        },
        Author {
            id: "2".into(),
            name: "Priya Sharma".into(),
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&h=200&fit=crop".into(),
            bio: "Senior Content Strategist with 5+ years of experience in digital marketing and brand storytelling.".into(),
            expertise: strings(&["Content Strategy", "Brand Storytelling", "Social Media"]),
            instagram: Some("priyasharma".into()),
            twitter: None,
            linkedin: Some("priyasharma".into()),
        },
    ]
}

pub(super) fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            slug: "how-to-create-viral-youtube-thumbnails".into(),
            title: "How to Create Viral YouTube Thumbnails That Get Clicks".into(),
            excerpt: "Learn the secrets behind creating YouTube thumbnails that dramatically increase your click-through rates and grow your channel.".into(),
            body: "Creating eye-catching thumbnails is one of the most crucial skills for any YouTube creator. A great thumbnail can be the difference between someone clicking on your video or scrolling past it. Use bold readable text, expressive faces, contrasting colors, and a clear subject.".into(),
            category: "Design Tips".into(),
            tags: strings(&["YouTube", "Thumbnails", "Design", "CTR"]),
            author_id: "1".into(),
            featured_image: "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?w=800&h=450&fit=crop".into(),
            read_time: 5,
            views: 2840,
            published_at: "2025-01-15".into(),
            modified_at: None,
        },
        BlogPost {
            id: "2".into(),
            slug: "instagram-marketing-strategies-2025".into(),
            title: "Instagram Marketing Strategies That Actually Work in 2025".into(),
            excerpt: "Discover the latest Instagram marketing strategies that help brands grow their following and increase engagement.".into(),
            body: "Instagram continues to evolve, and so should your marketing strategy. Reels are now the platform's primary focus, and the algorithm heavily favors short-form video. Build content pillars around education, entertainment, inspiration, and light promotion.".into(),
            category: "Social Media".into(),
            tags: strings(&["Instagram", "Marketing", "Reels", "Growth"]),
            author_id: "2".into(),
            featured_image: "https://images.unsplash.com/photo-1611262588024-d12430b98920?w=800&h=450&fit=crop".into(),
            read_time: 7,
            views: 3520,
            published_at: "2025-01-10".into(),
            modified_at: Some("2025-02-02".into()),
        },
        BlogPost {
            id: "3".into(),
            slug: "seo-tips-for-small-businesses".into(),
            title: "SEO Tips Every Small Business in Karnataka Should Know".into(),
            excerpt: "Local SEO strategies specifically designed for small businesses in Karnataka to dominate local search results.".into(),
            body: "Local SEO is crucial for small businesses. Complete your Google Business Profile, collect and respond to reviews, target local keywords, and build citations on directories like JustDial and IndiaMART.".into(),
            category: "SEO".into(),
            tags: strings(&["SEO", "Local Business", "Karnataka", "Google"]),
            author_id: "1".into(),
            featured_image: "https://images.unsplash.com/photo-1432888498266-38ffec3eaf0a?w=800&h=450&fit=crop".into(),
            read_time: 6,
            views: 1890,
            published_at: "2025-01-05".into(),
            modified_at: None,
        },
    ]
}

pub(super) fn reviews() -> Vec<Review> {
    let entries: [(&str, &str, &str, &str, u8, &str, bool); 6] = [
        (
            "1",
            "Rajesh Kumar",
            "TechStart Solutions",
            "Digital Marketing",
            5,
            "VisionCut transformed our online presence completely. Our social media engagement increased by 300% in just 3 months. Highly recommended!",
            true,
        ),
        (
            "2",
            "Priya Hegde",
            "Hegde Academy",
            "Educational Thumbnails",
            5,
            "The thumbnail designs for our YouTube channel are amazing! Our CTR improved from 2% to 8%. The team understands educational content perfectly.",
            true,
        ),
        (
            "3",
            "Suresh Gowda",
            "Gowda Textiles",
            "Logo Design",
            5,
            "Our new logo perfectly represents our brand heritage while looking modern. The process was smooth and the team was very responsive.",
            true,
        ),
        (
            "4",
            "Ananya Rao",
            "FitLife Studio",
            "Social Media Management",
            4,
            "Managing social media was overwhelming until we hired VisionCut. Now our Instagram is thriving with consistent, beautiful content!",
            false,
        ),
        (
            "5",
            "Mohammed Fazil",
            "Fazil Electronics",
            "Video Editing",
            5,
            "The product videos they created helped us increase online sales by 150%. Professional quality at a reasonable price.",
            true,
        ),
        (
            "6",
            "Lakshmi Narayana",
            "Sri Guru Coaching",
            "Course Promotion",
            5,
            "VisionCut helped us launch our online course successfully. The promotional creatives and strategy brought in 500+ enrollments!",
            true,
        ),
    ];
    entries
        .into_iter()
        .map(|(id, name, company, service, rating, text, featured)| Review {
            id: id.into(),
            name: name.into(),
            company: company.into(),
            service: service.into(),
            rating,
            text: text.into(),
            featured,
        })
        .collect()
}

pub(super) fn portfolio() -> Vec<PortfolioItem> {
    let entries: [(&str, &str, &str, &str, u32, &str); 9] = [
        (
            "1",
            "YouTube Thumbnail - Tech Review",
            "graphic",
            "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?w=600&h=600&fit=crop",
            234,
            "Eye-catching thumbnail design for a tech review channel #thumbnaildesign #youtube",
        ),
        (
            "2",
            "Brand Identity - Coffee Shop",
            "graphic",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600&h=600&fit=crop",
            456,
            "Complete brand identity for a local coffee shop #logodesign #branding",
        ),
        (
            "3",
            "Social Media Campaign",
            "marketing",
            "https://images.unsplash.com/photo-1611162618071-b39a2ec055fb?w=600&h=600&fit=crop",
            789,
            "Successful social media campaign that drove 10K+ engagement #socialmedia #marketing",
        ),
        (
            "4",
            "Educational Video Edit",
            "video",
            "https://images.unsplash.com/photo-1536240478700-b869070f9279?w=600&h=600&fit=crop",
            567,
            "Engaging educational video edit for online learning platform #videoediting #education",
        ),
        (
            "5",
            "Poster Design - Music Festival",
            "graphic",
            "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=600&h=600&fit=crop",
            892,
            "Vibrant poster design for a music festival #posterdesign #festival",
        ),
        (
            "6",
            "Reels Edit - Fashion Brand",
            "video",
            "https://images.unsplash.com/photo-1558171813-4c088753af8f?w=600&h=600&fit=crop",
            1234,
            "Trendy Reels edit for a fashion brand that went viral! #reels #fashion",
        ),
        (
            "7",
            "Website SEO Success",
            "seo",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=600&fit=crop",
            345,
            "500% organic traffic growth for our client! #seo #digitalmarketing",
        ),
        (
            "8",
            "Product Photography Edit",
            "graphic",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=600&h=600&fit=crop",
            678,
            "Clean product photo editing for e-commerce #productphotography #ecommerce",
        ),
        (
            "9",
            "Motion Graphics Intro",
            "video",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=600&h=600&fit=crop",
            901,
            "Dynamic motion graphics intro for a gaming channel #motiongraphics #gaming",
        ),
    ];
    entries
        .into_iter()
        .map(|(id, title, category, image, likes, caption)| PortfolioItem {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            image: image.into(),
            likes,
            caption: caption.into(),
        })
        .collect()
}

pub(super) fn stats() -> Vec<Stat> {
    [
        (500, "+", "Projects Completed"),
        (100, "+", "Happy Clients"),
        (50, "M+", "Views Generated"),
        (5, "+", "Years Experience"),
    ]
    .into_iter()
    .map(|(number, suffix, label)| Stat {
        number,
        suffix: suffix.into(),
        label: label.into(),
    })
    .collect()
}
