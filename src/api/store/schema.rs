use crate::json_record;

json_record! {
    /// Storefront page of one app
    ///
    /// The storefront is the least consistent part of the API.
    /// `website` is a literal json null for most older titles and
    /// `required_age` arrives as `0` or `"0"` depending on the app.
    /// Whole blocks disappear for delisted or free games
    pub struct AppDetails {
        app_type: String => required "type",
        name: String => required "name",
        steam_appid: u32 => required "steam_appid",
        required_age: u32 => lenient "required_age",
        is_free: bool => required "is_free",
        dlc: Option<Vec<u32>> => optional "dlc",
        detailed_description: String => required "detailed_description",
        about_the_game: String => required "about_the_game",
        short_description: String => required "short_description",
        supported_languages: Option<String> => optional "supported_languages",
        header_image: String => required "header_image",
        website: Option<String> => optional "website",
        developers: Option<Vec<String>> => optional "developers",
        publishers: Option<Vec<String>> => optional "publishers",
        price_overview: Option<PriceOverview> => optional "price_overview",
        platforms: Platforms => required "platforms",
        metacritic: Option<Metacritic> => optional "metacritic",
        categories: Option<Vec<Category>> => optional "categories",
        genres: Option<Vec<Genre>> => optional "genres",
        screenshots: Option<Vec<Screenshot>> => optional "screenshots",
        recommendations: Option<Recommendations> => optional "recommendations",
        achievements: Option<AchievementHighlights> => optional "achievements",
        release_date: ReleaseDate => required "release_date"

        // The requirements blocks switch between an object and an
        // empty array, and nothing here needs them

        // pub pc_requirements,
        // pub mac_requirements,
        // pub linux_requirements,
        // pub packages,
        // pub package_groups,
        // pub support_info,
        // pub content_descriptors
    }
}

json_record! {
    /// Price of an app, in the smallest unit of the currency
    pub struct PriceOverview {
        currency: String => required "currency",
        initial: u64 => required "initial",
        final_price: u64 => required "final",
        discount_percent: u32 => required "discount_percent",
        initial_formatted: Option<String> => optional "initial_formatted",
        final_formatted: Option<String> => optional "final_formatted"
    }
}

json_record! {
    pub struct Platforms {
        windows: bool => required "windows",
        mac: bool => required "mac",
        linux: bool => required "linux"
    }
}

json_record! {
    pub struct Metacritic {
        score: u32 => required "score",
        url: Option<String> => optional "url"
    }
}

json_record! {
    pub struct Category {
        id: u32 => required "id",
        description: String => required "description"
    }
}

json_record! {
    /// Genre ids are strings, unlike category ids right next to
    /// them, which are numbers
    pub struct Genre {
        id: u32 => lenient "id",
        description: String => required "description"
    }
}

json_record! {
    pub struct Screenshot {
        id: u32 => required "id",
        path_thumbnail: String => required "path_thumbnail",
        path_full: String => required "path_full"
    }
}

json_record! {
    pub struct Recommendations {
        total: u64 => required "total"
    }
}

json_record! {
    /// Achievement showcase of the store page: the total amount
    /// and up to ten highlighted ones
    pub struct AchievementHighlights {
        total: u32 => required "total",
        highlighted: Option<Vec<HighlightedAchievement>> => optional "highlighted"
    }
}

json_record! {
    pub struct HighlightedAchievement {
        name: String => required "name",
        path: String => required "path"
    }
}

json_record! {
    pub struct ReleaseDate {
        coming_soon: bool => required "coming_soon",
        date: String => required "date"
    }
}
