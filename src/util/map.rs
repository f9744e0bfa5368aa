use std::collections::HashMap;

/// 以鍵名收進 HashMap 的資料
pub trait Keyable {
    fn key(&self) -> String;
}

/// 鍵名重複時保留最後一筆
pub fn vec_to_hashmap<T: Keyable>(entities: Vec<T>) -> HashMap<String, T> {
    let mut map = HashMap::with_capacity(entities.len());
    for e in entities {
        map.insert(e.key(), e);
    }
    map
}
