#![no_main]

use costcache::ds::IntrusiveList;
use libfuzzer_sys::fuzz_target;
use std::collections::VecDeque;

// Fuzz arbitrary operation sequences on IntrusiveList against a VecDeque
// of ids, checking order and handle stability after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut model = VecDeque::new();
    let mut all_ids = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = u32::from(data[idx + 1]);
        let pick = |ids: &Vec<_>| ids.get(value as usize % ids.len().max(1)).copied();

        match op {
            0 => {
                let id = list.push_front(value);
                model.push_front(id);
                all_ids.push(id);
                assert_eq!(list.front(), Some(&value));
            }
            1 => {
                let id = list.push_back(value);
                model.push_back(id);
                all_ids.push(id);
                assert_eq!(list.back(), Some(&value));
            }
            2 => {
                let expected = model.pop_front().map(|_| ());
                assert_eq!(list.pop_front().map(|_| ()), expected);
            }
            3 => {
                let expected = model.pop_back().map(|_| ());
                assert_eq!(list.pop_back().map(|_| ()), expected);
            }
            4 => {
                if let Some(id) = pick(&all_ids) {
                    let moved = list.move_to_front(id);
                    assert_eq!(moved, model.contains(&id));
                    if moved {
                        model.retain(|&m| m != id);
                        model.push_front(id);
                    }
                }
            }
            5 => {
                if let Some(id) = pick(&all_ids) {
                    let moved = list.move_to_back(id);
                    assert_eq!(moved, model.contains(&id));
                    if moved {
                        model.retain(|&m| m != id);
                        model.push_back(id);
                    }
                }
            }
            6 => {
                if let Some(id) = pick(&all_ids) {
                    let removed = list.remove(id).is_some();
                    assert_eq!(removed, model.contains(&id));
                    model.retain(|&m| m != id);
                    assert!(!list.contains(id));
                }
            }
            7 => {
                list.clear();
                model.clear();
                assert!(list.is_empty());
                assert_eq!(list.front(), None);
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter_ids().eq(model.iter().copied()));

        idx += 2;
    }
});
