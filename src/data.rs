use chrono::{NaiveDate, NaiveDateTime};
use crate::models::{
    ConsultationType, Course, CourseDetails, CurriculumWeek, EventKind, EventStatus, Expert,
    InstructorProfile, Level, Review, ScheduleEvent, TeamMember,
};

pub const CATEGORIES: &[&str] = &[
    "all",
    "Programming",
    "Data Science",
    "Marketing",
    "Design",
    "Cloud",
    "Business",
];

pub const TIME_SLOTS: &[&str] = &[
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM",
    "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM", "06:00 PM",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: u32,
    title: &str,
    instructor: &str,
    category: &str,
    level: &str,
    duration: &str,
    students: u32,
    rating: f32,
    price: u32,
    description: &str,
    tags: &[&str],
) -> Course {
    Course {
        id,
        title: title.to_string(),
        instructor: instructor.to_string(),
        category: category.to_string(),
        level: Level::from(level),
        duration: duration.to_string(),
        students,
        rating,
        price,
        description: description.to_string(),
        tags: strings(tags),
    }
}

pub fn get_courses() -> Vec<Course> {
    vec![
        course(
            1, "Full-Stack Web Development", "Dr. Sarah Johnson", "Programming", "Beginner",
            "12 weeks", 1200, 4.9, 299,
            "Master modern web development with React, Node.js, and database integration.",
            &["React", "Node.js", "MongoDB"],
        ),
        course(
            2, "Data Science & Analytics", "Prof. Michael Chen", "Data Science", "Intermediate",
            "16 weeks", 850, 4.8, 399,
            "Learn Python, machine learning, and data visualization for real-world applications.",
            &["Python", "ML", "Pandas"],
        ),
        course(
            3, "Digital Marketing Mastery", "Emily Rodriguez", "Marketing", "Beginner",
            "8 weeks", 2100, 4.7, 199,
            "Complete guide to social media, SEO, and content marketing strategies.",
            &["SEO", "Social Media", "Analytics"],
        ),
        course(
            4, "UI/UX Design Fundamentals", "Alex Kim", "Design", "Beginner",
            "10 weeks", 950, 4.9, 249,
            "Create beautiful and functional user interfaces with modern design principles.",
            &["Figma", "Prototyping", "User Research"],
        ),
        course(
            5, "Cloud Computing with AWS", "David Thompson", "Cloud", "Advanced",
            "14 weeks", 600, 4.8, 449,
            "Master AWS services and cloud architecture for scalable applications.",
            &["AWS", "Docker", "Kubernetes"],
        ),
        course(
            6, "Business Analytics", "Lisa Wang", "Business", "Intermediate",
            "12 weeks", 750, 4.6, 329,
            "Use data to drive business decisions and improve organizational performance.",
            &["Excel", "Tableau", "Statistics"],
        ),
    ]
}

pub fn get_course_details(course_id: u32) -> Option<CourseDetails> {
    if course_id != 1 {
        return None;
    }
    fn week(week: u32, title: &str, lessons: u32, duration: &str, topics: &[&str]) -> CurriculumWeek {
        CurriculumWeek {
            week,
            title: title.to_string(),
            lessons,
            duration: duration.to_string(),
            topics: strings(topics),
        }
    }
    let review = |name: &str, rating: u8, date: &str, content: &str| Review {
        name: name.to_string(),
        rating,
        date: date.to_string(),
        content: content.to_string(),
    };

    Some(CourseDetails {
        course_id,
        reviews: 450,
        original_price: 399,
        long_description: "This comprehensive full-stack web development course is designed to take you from a complete beginner to a job-ready developer. You'll learn modern JavaScript, React for frontend development, Node.js for backend, and MongoDB for database management. The course includes hands-on projects, code reviews, and career guidance.".to_string(),
        what_you_learn: strings(&[
            "Build responsive web applications with React",
            "Create RESTful APIs with Node.js and Express",
            "Work with MongoDB and database design",
            "Implement user authentication and authorization",
            "Deploy applications to cloud platforms",
            "Follow industry best practices and coding standards",
        ]),
        requirements: strings(&[
            "Basic computer skills",
            "No prior programming experience required",
            "Computer with internet connection",
            "Willingness to practice coding daily",
        ]),
        extra_tags: strings(&["JavaScript", "HTML", "CSS"]),
        curriculum: vec![
            week(1, "HTML & CSS Fundamentals", 8, "4 hours",
                 &["HTML Structure", "CSS Styling", "Responsive Design", "Flexbox & Grid"]),
            week(2, "JavaScript Basics", 10, "5 hours",
                 &["Variables & Data Types", "Functions", "Objects & Arrays", "DOM Manipulation"]),
            week(3, "Advanced JavaScript", 8, "4 hours",
                 &["ES6+ Features", "Async Programming", "APIs", "Error Handling"]),
            week(4, "React Fundamentals", 12, "6 hours",
                 &["Components", "Props & State", "Event Handling", "Lifecycle Methods"]),
            week(5, "Advanced React", 10, "5 hours",
                 &["Hooks", "Context API", "Routing", "State Management"]),
            week(6, "Node.js & Express", 9, "4.5 hours",
                 &["Server Setup", "Routing", "Middleware", "File Handling"]),
        ],
        reviews_list: vec![
            review("Mike Chen", 5, "2 weeks ago",
                   "Excellent course! Sarah explains complex concepts in a very understandable way. The projects are practical and relevant to real-world development."),
            review("Lisa Rodriguez", 5, "1 month ago",
                   "This course changed my career. I went from knowing nothing about programming to landing my first developer job. Highly recommended!"),
            review("David Kim", 4, "2 months ago",
                   "Great content and structure. The hands-on approach really helps solidify the concepts. Would love to see more advanced topics in future modules."),
        ],
    })
}

pub fn get_instructor_profile(name: &str) -> Option<InstructorProfile> {
    match name {
        "Dr. Sarah Johnson" => Some(InstructorProfile {
            name: name.to_string(),
            bio: "Senior Software Engineer with 10+ years experience at Google and Meta. PhD in Computer Science from Stanford.".to_string(),
            rating: 4.9,
            students: 15000,
            courses: 8,
        }),
        _ => None,
    }
}

pub fn get_experts() -> Vec<Expert> {
    let expert = |id: &str, name: &str, specialty: &str, experience: &str, rating: f32,
                  reviews: u32, price: u32, bio: &str, availability: &str| Expert {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        experience: experience.to_string(),
        rating,
        reviews,
        price,
        bio: bio.to_string(),
        availability: availability.to_string(),
    };
    vec![
        expert("1", "Dr. Sarah Johnson", "Full-Stack Development", "10+ years", 4.9, 450, 75,
               "Former Google engineer specializing in React, Node.js, and system design.",
               "Available today"),
        expert("2", "Prof. Michael Chen", "Data Science & AI", "12+ years", 4.8, 320, 85,
               "PhD in Machine Learning, former Tesla AI researcher.",
               "Available tomorrow"),
        expert("3", "Emily Rodriguez", "Digital Marketing", "8+ years", 4.9, 280, 65,
               "Marketing Director at top tech companies, growth strategy expert.",
               "Available this week"),
        expert("4", "Alex Kim", "UI/UX Design", "9+ years", 4.7, 195, 70,
               "Senior Designer at Apple, specializing in mobile and web interfaces.",
               "Available next week"),
    ]
}

pub fn get_consultation_types() -> Vec<ConsultationType> {
    let kind = |key: &str, title: &str, duration: &str, description: &str, icon: &'static str| ConsultationType {
        key: key.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        icon,
    };
    vec![
        kind("career-guidance", "Career Guidance", "45 minutes",
             "Get personalized career advice and roadmap planning", "users"),
        kind("technical-review", "Technical Review", "60 minutes",
             "Code review, architecture discussion, and best practices", "circle-check"),
        kind("project-consultation", "Project Consultation", "30 minutes",
             "Discuss your project ideas and get expert feedback", "message"),
        kind("interview-prep", "Interview Preparation", "60 minutes",
             "Mock interviews and technical interview preparation", "video"),
    ]
}

pub fn get_upcoming_events() -> Vec<ScheduleEvent> {
    vec![
        ScheduleEvent {
            id: 1,
            title: "React Fundamentals - Live Session".to_string(),
            kind: EventKind::from("course"),
            starts_at: at(2024, 12, 15, 10, 0),
            duration_minutes: 90,
            instructor: "Dr. Sarah Johnson".to_string(),
            attendees: Some(45),
            status: EventStatus::from("confirmed"),
            meeting_link: Some("https://meet.example.com/react-session".to_string()),
            recording: None,
            notes: None,
        },
        ScheduleEvent {
            id: 2,
            title: "Career Guidance Consultation".to_string(),
            kind: EventKind::from("consultation"),
            starts_at: at(2024, 12, 16, 14, 30),
            duration_minutes: 45,
            instructor: "Prof. Michael Chen".to_string(),
            attendees: None,
            status: EventStatus::from("confirmed"),
            meeting_link: Some("https://meet.example.com/career-guidance".to_string()),
            recording: None,
            notes: None,
        },
        ScheduleEvent {
            id: 3,
            title: "JavaScript Deep Dive - Workshop".to_string(),
            kind: EventKind::from("workshop"),
            starts_at: at(2024, 12, 18, 16, 0),
            duration_minutes: 120,
            instructor: "Emily Rodriguez".to_string(),
            attendees: Some(25),
            status: EventStatus::from("pending"),
            meeting_link: Some("https://meet.example.com/js-workshop".to_string()),
            recording: None,
            notes: None,
        },
        ScheduleEvent {
            id: 4,
            title: "Code Review Session".to_string(),
            kind: EventKind::from("consultation"),
            starts_at: at(2024, 12, 20, 11, 0),
            duration_minutes: 60,
            instructor: "Alex Kim".to_string(),
            attendees: None,
            status: EventStatus::from("confirmed"),
            meeting_link: Some("https://meet.example.com/code-review".to_string()),
            recording: None,
            notes: None,
        },
    ]
}

pub fn get_past_events() -> Vec<ScheduleEvent> {
    vec![
        ScheduleEvent {
            id: 5,
            title: "HTML/CSS Basics - Live Session".to_string(),
            kind: EventKind::from("course"),
            starts_at: at(2024, 12, 10, 9, 0),
            duration_minutes: 90,
            instructor: "Dr. Sarah Johnson".to_string(),
            attendees: Some(52),
            status: EventStatus::from("completed"),
            meeting_link: None,
            recording: Some("https://recordings.example.com/html-css".to_string()),
            notes: None,
        },
        ScheduleEvent {
            id: 6,
            title: "Portfolio Review Consultation".to_string(),
            kind: EventKind::from("consultation"),
            starts_at: at(2024, 12, 8, 15, 0),
            duration_minutes: 45,
            instructor: "Alex Kim".to_string(),
            attendees: None,
            status: EventStatus::from("completed"),
            meeting_link: None,
            recording: None,
            notes: Some("Great progress on the design system implementation".to_string()),
        },
    ]
}

pub fn get_team() -> Vec<TeamMember> {
    let member = |name: &str, role: &str, specialty: &str, bio: &str| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        specialty: specialty.to_string(),
        bio: bio.to_string(),
    };
    vec![
        member("Dr. Sarah Johnson", "Founder & CEO", "Full-Stack Development",
               "Former Google engineer with a passion for education. PhD in Computer Science from Stanford."),
        member("Prof. Michael Chen", "Head of Data Science", "Machine Learning & AI",
               "Former Tesla AI researcher, published 50+ papers in machine learning and data science."),
        member("Emily Rodriguez", "Director of Marketing", "Digital Marketing",
               "Marketing expert who helped 100+ companies scale their digital presence."),
        member("Alex Kim", "Lead UX Designer", "UI/UX Design",
               "Award-winning designer who worked at Apple, Meta, and leading design agencies."),
        member("David Thompson", "Cloud Architect", "DevOps & Cloud",
               "AWS certified architect with experience building scalable systems at Fortune 500 companies."),
        member("Lisa Wang", "Business Analyst", "Business Strategy",
               "Former McKinsey consultant specialized in business transformation and analytics."),
    ]
}

// --- Static page content ---

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub note: &'static str,
    pub link: Option<&'static str>,
}

pub struct DashboardStat {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub struct CourseProgress {
    pub title: &'static str,
    pub progress: u8,
    pub next_lesson: &'static str,
    pub instructor: &'static str,
}

pub const PLATFORM_STATS: &[Stat] = &[
    Stat { value: "10,000+", label: "Students" },
    Stat { value: "200+", label: "Courses" },
    Stat { value: "50+", label: "Expert Instructors" },
    Stat { value: "95%", label: "Success Rate" },
];

pub const FEATURES: &[Highlight] = &[
    Highlight { icon: "book-open", title: "Expert-Led Courses",
                description: "Learn from industry professionals with years of experience in their fields." },
    Highlight { icon: "users", title: "Interactive Community",
                description: "Connect with fellow learners and build your professional network." },
    Highlight { icon: "calendar", title: "Flexible Scheduling",
                description: "Book consultations and study sessions that fit your busy lifestyle." },
    Highlight { icon: "award", title: "Certified Learning",
                description: "Earn recognized certificates upon successful course completion." },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { name: "Sarah Johnson", role: "Software Developer",
                  content: "The courses here transformed my career. The personalized consultation sessions were invaluable." },
    Testimonial { name: "Michael Chen", role: "Product Manager",
                  content: "Flexible scheduling and expert instructors made learning while working full-time possible." },
    Testimonial { name: "Emily Rodriguez", role: "UX Designer",
                  content: "The community aspect really sets this platform apart. I found my mentor here!" },
];

pub const VALUES: &[Highlight] = &[
    Highlight { icon: "bullseye", title: "Excellence in Education",
                description: "We are committed to providing the highest quality educational content and experiences that truly transform careers." },
    Highlight { icon: "users", title: "Community First",
                description: "We believe in the power of community and peer learning to accelerate growth and success." },
    Highlight { icon: "heart", title: "Passion for Growth",
                description: "We are passionate about helping individuals unlock their potential and achieve their dreams." },
    Highlight { icon: "globe", title: "Accessible Learning",
                description: "We make high-quality education accessible to everyone, regardless of background or location." },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone { year: "2020", title: "Company Founded",
                description: "Started with a mission to democratize quality education and bridge the skills gap in tech." },
    Milestone { year: "2021", title: "First 1,000 Students",
                description: "Reached our first major milestone with students from over 30 countries." },
    Milestone { year: "2022", title: "Partnership Program",
                description: "Launched partnerships with leading tech companies for job placement assistance." },
    Milestone { year: "2023", title: "Global Expansion",
                description: "Expanded to serve students in over 50 countries with localized content." },
    Milestone { year: "2024", title: "10,000 Graduates",
                description: "Celebrated 10,000 successful graduates with 95% job placement rate." },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "envelope", title: "Email Us", detail: "hello@eduplatform.com",
                     note: "Send us an email anytime!", link: Some("mailto:hello@eduplatform.com") },
    ContactChannel { icon: "phone", title: "Call Us", detail: "+1 (555) 123-4567",
                     note: "Mon-Fri from 8am to 6pm", link: Some("tel:+15551234567") },
    ContactChannel { icon: "location-dot", title: "Visit Us", detail: "123 Education St, Learning City, LC 12345",
                     note: "Come say hello at our HQ", link: None },
];

pub const SUPPORT_HOURS: &[&str] = &[
    "Monday - Friday: 8am - 6pm PST",
    "Weekend: 10am - 4pm PST",
];

pub const FAQS: &[Faq] = &[
    Faq { question: "How do I enroll in a course?",
          answer: "You can browse our courses and click \"Enroll Now\" on any course page. You'll need to create an account and complete the payment process." },
    Faq { question: "Can I get a refund if I'm not satisfied?",
          answer: "Yes! We offer a 30-day money-back guarantee for all our courses. Contact support if you'd like to request a refund." },
    Faq { question: "Do you offer certificates upon completion?",
          answer: "Yes, you'll receive a certificate of completion for every course you finish. Our certificates are recognized by industry leaders." },
    Faq { question: "How does the consultation service work?",
          answer: "You can book one-on-one consultations with our expert instructors. Choose your preferred time slot and receive personalized guidance on your learning journey." },
    Faq { question: "Are there any prerequisites for courses?",
          answer: "Course prerequisites are listed on each course page. Many of our beginner courses require no prior experience, while advanced courses may have specific requirements." },
];

pub const DASHBOARD_STATS: &[DashboardStat] = &[
    DashboardStat { icon: "book-open", title: "Courses Enrolled", value: "5", change: "+2 this month" },
    DashboardStat { icon: "clock", title: "Hours Learned", value: "87", change: "+12 this week" },
    DashboardStat { icon: "trophy", title: "Certificates", value: "3", change: "1 pending" },
    DashboardStat { icon: "arrow-trend-up", title: "Streak", value: "15 days", change: "Keep going!" },
];

pub const CURRENT_COURSES: &[CourseProgress] = &[
    CourseProgress { title: "React Fundamentals", progress: 75, next_lesson: "State Management",
                     instructor: "Dr. Sarah Johnson" },
    CourseProgress { title: "Node.js Backend", progress: 45, next_lesson: "Database Integration",
                     instructor: "Prof. Michael Chen" },
    CourseProgress { title: "UI/UX Design", progress: 90, next_lesson: "Final Project",
                     instructor: "Alex Kim" },
];

pub const WEEK_STATS: &[Stat] = &[
    Stat { value: "8", label: "Sessions" },
    Stat { value: "12.5h", label: "Hours" },
    Stat { value: "3", label: "Consultations" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn course_ids_are_unique() {
        let courses = get_courses();
        let ids: HashSet<u32> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), courses.len());
        assert!(courses.iter().all(|c| !matches!(c.level, Level::Unrecognized(_))));
    }

    #[test]
    fn every_course_category_is_listed() {
        for course in get_courses() {
            assert!(CATEGORIES.contains(&course.category.as_str()), "{}", course.category);
        }
        assert_eq!(CATEGORIES[0], "all");
    }

    #[test]
    fn seeded_dates_are_valid() {
        let epoch = NaiveDateTime::default();
        for event in get_upcoming_events().iter().chain(get_past_events().iter()) {
            assert_ne!(event.starts_at, epoch, "event {} has an invalid date", event.id);
        }
    }

    #[test]
    fn upcoming_and_past_sets_are_disjoint() {
        let upcoming: HashSet<u32> = get_upcoming_events().iter().map(|e| e.id).collect();
        assert!(get_past_events().iter().all(|e| !upcoming.contains(&e.id)));
    }

    #[test]
    fn only_the_flagship_course_has_extended_details() {
        assert!(get_course_details(1).is_some());
        assert!(get_course_details(2).is_none());
    }
}
