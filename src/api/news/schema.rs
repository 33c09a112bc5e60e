use crate::json_record;

json_record! {
    /// One news entry
    ///
    /// `gid` is a 64 bit id sent as a string. `contents` is html,
    /// possibly truncated to the requested maximum length
    pub struct NewsItem {
        gid: u64 => lenient "gid",
        title: String => required "title",
        url: String => required "url",
        is_external_url: bool => required "is_external_url",
        author: Option<String> => optional "author",
        contents: String => required "contents",
        feed_label: Option<String> => optional "feedlabel",
        date: u64 => required "date",
        feed_name: Option<String> => optional "feedname",
        feed_type: Option<u8> => optional "feed_type",
        appid: u32 => required "appid"
    }
}

json_record! {
    /// News feed of one app
    ///
    /// `count` is the total amount of entries the feed has, not
    /// the amount returned
    pub struct AppNews {
        appid: u32 => required "appid",
        newsitems: Vec<NewsItem> => required "newsitems",
        count: u32 => required "count"
    }
}
