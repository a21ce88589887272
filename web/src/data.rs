//! Static site content: menu, gallery, team, events and the mock Instagram feed.

use chrono::{Days, NaiveDate};
use shared_types::{Event, GalleryImage, InstagramPost, MenuItem, MenuSection, TeamMember, Testimonial};

const BLOB: &str = "https://2r66v53nwmfsqes8.public.blob.vercel-storage.com";
const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/therug_london/";

fn blob(name: &str) -> String {
    format!("{}/{}", BLOB, name)
}

fn item(name: &str, description: &str, price: &str, dietary: &[&str]) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        dietary: dietary.iter().map(|tag| tag.to_string()).collect(),
        image: None,
        featured: false,
    }
}

pub fn menu_sections() -> Vec<MenuSection> {
    vec![
        MenuSection {
            name: "Breakfast & Brunch".to_string(),
            description: "Served until 3pm daily".to_string(),
            items: vec![
                MenuItem {
                    image: Some(blob(
                        "photosFromInstagram3-ssSeDlHnRMhdbnKrA2WkFtpANoIPl2.jpg",
                    )),
                    ..item(
                        "Classic Avocado Toast",
                        "Sourdough bread topped with smashed avocado, poached eggs, chili flakes and microgreens",
                        "£11.50",
                        &["V", "GF option"],
                    )
                },
                MenuItem {
                    featured: true,
                    ..item(
                        "Kimchi Cheese Toastie",
                        "House-made kimchi with mature cheddar and mozzarella on our artisan sourdough",
                        "£8.90",
                        &["V"],
                    )
                },
                item(
                    "Matcha Pancakes",
                    "Fluffy Japanese-style pancakes with ceremonial grade matcha, served with maple syrup and seasonal fruits",
                    "£12.80",
                    &["V"],
                ),
            ],
        },
        MenuSection {
            name: "Coffee & Tea".to_string(),
            description: "Specialty grade coffee and premium loose leaf teas".to_string(),
            items: vec![
                MenuItem {
                    image: Some(blob(
                        "photosFromInstagram8-c9MLDs8OvwKpIf7OaPDrS1jLW0A9Hl.jpg",
                    )),
                    featured: true,
                    ..item(
                        "The Rug's Signature Latte",
                        "Our house blend with hints of chocolate and caramel, available with dairy or plant-based milks",
                        "£4.20",
                        &["VG option"],
                    )
                },
                item(
                    "Seasonal Pour Over",
                    "Single-origin coffee brewed to perfection. Ask your server for this month's selection",
                    "£5.50",
                    &["VG"],
                ),
            ],
        },
    ]
}

fn image(src: &str, alt: &str, title: &str, description: Option<&str>) -> GalleryImage {
    GalleryImage {
        src: blob(src),
        alt: alt.to_string(),
        title: Some(title.to_string()),
        description: description.map(str::to_string),
    }
}

/// Food photography on the menu page.
pub fn menu_gallery() -> Vec<GalleryImage> {
    vec![
        image(
            "photosFromInstagram2-iIiUF6so0LREToo7xXkXjNNlfd0p5G.jpg",
            "Matcha Latte Art",
            "Matcha Latte",
            Some("Our signature matcha latte with house-made almond milk"),
        ),
        image(
            "photosFromInstagram5-ziW9iStMXLMjkqjAA2uZoKGhVVEGrz.jpg",
            "Banana Oatmeal Bowl",
            "Banana Oatmeal Bowl",
            Some("Organic oats with caramelized banana and seasonal berries"),
        ),
        image(
            "photosFromInstagram6-g8B6wiehtr6aIDLcE1hlKYkLZTMKqF.jpg",
            "Korean-Inspired Breakfast",
            "Korean Breakfast Bowl",
            Some("Rice bowl with kimchi, soft egg and sesame spinach"),
        ),
        image(
            "photosFromInstagram3-ssSeDlHnRMhdbnKrA2WkFtpANoIPl2.jpg",
            "Banana Toast with Blueberries",
            "Banana Toast",
            Some("Sourdough toast with banana, blueberries and honey"),
        ),
        image(
            "photosFromInstagram8-c9MLDs8OvwKpIf7OaPDrS1jLW0A9Hl.jpg",
            "Latte with Heart Art",
            "Signature Latte",
            Some("Our house blend espresso with velvety microfoam"),
        ),
        image(
            "photosFromInstagram11-9ukr9L9k9n8qWWBx8bXPhWfJTmTadm.jpg",
            "Iced Matcha Beverage",
            "Iced Matcha",
            Some("Ceremonial grade matcha over ice with oat milk"),
        ),
    ]
}

/// "Featured Delights" on the home page.
pub fn featured_images() -> Vec<GalleryImage> {
    vec![
        image(
            "photosFromInstagram2-iIiUF6so0LREToo7xXkXjNNlfd0p5G.jpg",
            "Matcha Latte Art",
            "Specialty Drinks",
            Some("Handcrafted with care, from classic espresso to signature matcha"),
        ),
        image(
            "photosFromInstagram5-ziW9iStMXLMjkqjAA2uZoKGhVVEGrz.jpg",
            "Banana Oatmeal Bowl",
            "House Specialties",
            Some("Fresh-baked delights featuring our house-made espresso butter"),
        ),
        image(
            "photosFromInstagram8-c9MLDs8OvwKpIf7OaPDrS1jLW0A9Hl.jpg",
            "Latte with Heart Art",
            "Artisanal Coffee",
            Some("Every cup tells a story, garnished with seasonal flowers"),
        ),
    ]
}

/// "Current Favorites" on the home page.
pub fn menu_highlights() -> Vec<GalleryImage> {
    vec![
        image(
            "photosFromInstagram6-g8B6wiehtr6aIDLcE1hlKYkLZTMKqF.jpg",
            "Korean-Inspired Breakfast",
            "Asian Fusion Breakfast",
            None,
        ),
        image(
            "photosFromInstagram3-ssSeDlHnRMhdbnKrA2WkFtpANoIPl2.jpg",
            "Banana Toast with Blueberries",
            "Sweet Treats",
            None,
        ),
        image(
            "photosFromInstagram11-9ukr9L9k9n8qWWBx8bXPhWfJTmTadm.jpg",
            "Iced Matcha Beverage",
            "Signature Drinks",
            None,
        ),
    ]
}

pub fn hero_background() -> String {
    blob("photosFromInstagram9-Ogm8xP3xXSub3Pul9cofPQnyDE7qyz.jpg")
}

pub fn about_images() -> Vec<GalleryImage> {
    [
        ("photosFromInstagram2-iIiUF6so0LREToo7xXkXjNNlfd0p5G.jpg", "The Rug Café interior"),
        ("photosFromInstagram8-c9MLDs8OvwKpIf7OaPDrS1jLW0A9Hl.jpg", "Latte with latte art"),
    ]
    .into_iter()
    .map(|(src, alt)| GalleryImage {
        src: blob(src),
        alt: alt.to_string(),
        title: None,
        description: None,
    })
    .collect()
}

fn member(name: &str, role: &str, bio: &str, photo: &str, favorite: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        image: format!(
            "https://images.unsplash.com/{}?auto=format&fit=crop&w=500&q=80",
            photo
        ),
        favorite_item: Some(favorite.to_string()),
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(
            "Samira Ahmed",
            "Founder & Head Chef",
            "With over 15 years of culinary experience across Asia and Europe, Samira founded The Rug Café to blend her passion for specialty coffee with innovative Asian-inspired cuisine. Her commitment to quality and community has made the café a beloved local institution.",
            "photo-1580489944761-15a19d654956",
            "Kimchi Cheese Toastie with our house-blend espresso",
        ),
        member(
            "James Wilson",
            "Head Barista",
            "A certified Q-grader with a background in specialty coffee shops across London, James brings his technical expertise and passion for perfect extraction to every cup. He's constantly experimenting with new brewing methods and seasonal beans.",
            "photo-1507003211169-0a1dd7228f2d",
            "Our seasonal single-origin pour-over",
        ),
        member(
            "Mei Lin",
            "Pastry Chef",
            "Trained in both French and Japanese pastry techniques, Mei creates our signature baked goods that perfectly balance sweetness with complex flavors. Her matcha-infused pastries have developed a cult following among our regulars.",
            "photo-1544005313-94ddf0286df2",
            "Black sesame and white chocolate cookies",
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "The best brunch spot in London! The matcha latte and kimchi toastie are a must.",
            "Priya K.",
            "women/68",
        ),
        (
            "Cosy vibe, friendly staff, and delicious food. I always bring my friends here.",
            "Alex M.",
            "men/45",
        ),
        (
            "A hidden gem! The atmosphere is so relaxing and the pastries are divine.",
            "Fatima S.",
            "women/33",
        ),
    ]
    .into_iter()
    .map(|(quote, author, portrait)| Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        avatar: format!("https://randomuser.me/api/portraits/{}.jpg", portrait),
    })
    .collect()
}

/// Upcoming café events, scheduled relative to `today`.
pub fn events(today: NaiveDate) -> Vec<Event> {
    let schedule = [
        (
            "1",
            "Coffee Brewing Masterclass",
            "Join our head barista James for an interactive workshop on brewing methods. Learn the secrets behind the perfect pour-over, French press, and AeroPress techniques. All participants will receive a bag of our house-blend coffee beans to take home.",
            5,
            (18, 30),
            "18:30 - 20:00",
            "photo-1495474472287-4d71bcdd2085",
        ),
        (
            "2",
            "Asian Fusion Dinner Night",
            "A special evening featuring a six-course tasting menu that showcases our chef's innovative approach to Asian fusion cuisine. Each course is paired with either specialty tea, coffee, or natural wine. Limited seating available.",
            12,
            (19, 0),
            "19:00 - 22:00",
            "photo-1414235077428-338989a2e8c0",
        ),
        (
            "3",
            "Latte Art Workshop",
            "Learn the basics of latte art from our expert baristas. This hands-on workshop will teach you how to create hearts, rosettas, and tulips in your coffee. Perfect for beginners and intermediate coffee enthusiasts.",
            19,
            (10, 30),
            "10:30 - 12:00",
            "photo-1541167760496-1628856ab772",
        ),
    ];

    schedule
        .into_iter()
        .filter_map(|(id, title, description, offset, (hour, minute), time, photo)| {
            let date = today
                .checked_add_days(Days::new(offset))?
                .and_hms_opt(hour, minute, 0)?;
            Some(Event {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                date,
                time: time.to_string(),
                image: Some(format!(
                    "https://images.unsplash.com/{}?auto=format&fit=crop&w=500&q=80",
                    photo
                )),
                ticket_link: Some("#".to_string()),
            })
        })
        .collect()
}

/// Stand-in for the Instagram API.
pub fn instagram_posts() -> Vec<InstagramPost> {
    [
        (
            blob("photosFromInstagram2-iIiUF6so0LREToo7xXkXjNNlfd0p5G.jpg"),
            "Start your day right with our signature matcha latte ☕ #RugCafe #MorningVibes",
            124,
        ),
        (
            blob("photosFromInstagram5-ziW9iStMXLMjkqjAA2uZoKGhVVEGrz.jpg"),
            "Our banana oatmeal bowl is the perfect healthy breakfast option 🍌 #HealthyEating #BreakfastGoals",
            98,
        ),
        (
            blob("photosFromInstagram8-c9MLDs8OvwKpIf7OaPDrS1jLW0A9Hl.jpg"),
            "Latte art is our passion ❤️ #CoffeeArt #BaristaMagic",
            156,
        ),
        (
            blob("photosFromInstagram6-g8B6wiehtr6aIDLcE1hlKYkLZTMKqF.jpg"),
            "Our Korean-inspired breakfast is a customer favorite! #FusionFood #BrunchTime",
            132,
        ),
        (
            blob("photosFromInstagram3-ssSeDlHnRMhdbnKrA2WkFtpANoIPl2.jpg"),
            "Sweet treats to brighten your day 🍓 #Desserts #SweetTooth",
            87,
        ),
        (
            blob("photosFromInstagram11-9ukr9L9k9n8qWWBx8bXPhWfJTmTadm.jpg"),
            "Cool down with our refreshing iced matcha 🍵 #SummerVibes #Matcha",
            109,
        ),
        (
            blob("photosFromInstagram9-Ogm8xP3xXSub3Pul9cofPQnyDE7qyz.jpg"),
            "Behind the scenes with our barista team! #TeamWork #CoffeeLovers",
            76,
        ),
        (
            "https://images.unsplash.com/photo-1579494376913-9af0c980e4a7".to_string(),
            "Weekend vibes at The Rug Café ✨ #WeekendBrunch #CafeLife",
            143,
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (image_url, caption, likes))| InstagramPost {
        id: (i + 1).to_string(),
        image_url,
        caption: caption.to_string(),
        likes,
        permalink: INSTAGRAM_PROFILE.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use shared_types::{events_on_day, filter_sections, DietaryFilter};

    #[test]
    fn events_are_scheduled_after_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let events = events(today);

        assert_eq!(events.len(), 3);
        let masterclass = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let on_day = events_on_day(&events, masterclass);
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].title, "Coffee Brewing Masterclass");
        assert_eq!(on_day[0].date.hour(), 18);
    }

    #[test]
    fn vegan_filter_hides_option_only_items() {
        let vegan = filter_sections(&menu_sections(), DietaryFilter::Vegan);

        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].name, "Coffee & Tea");
        assert_eq!(vegan[0].items.len(), 1);
        assert_eq!(vegan[0].items[0].name, "Seasonal Pour Over");
    }

    #[test]
    fn gluten_free_filter_is_empty() {
        assert!(filter_sections(&menu_sections(), DietaryFilter::GlutenFree).is_empty());
    }

    #[test]
    fn feed_has_more_posts_than_default_count() {
        let posts = instagram_posts();
        assert_eq!(posts.len(), 8);
        assert_eq!(posts[0].id, "1");
        assert!(posts.iter().all(|p| p.permalink == INSTAGRAM_PROFILE));
    }
}
