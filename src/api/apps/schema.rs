use crate::json_record;

json_record! {
    /// App list entry. Everything beyond the id and the name
    /// lives in the store details method
    pub struct App {
        appid: u32 => required "appid",
        name: String => required "name"
    }
}
