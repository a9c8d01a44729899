use bjcount::{Chip, Game, GameOptions, Intent, MemoryStore};
use wasm_bindgen::prelude::*;

/// A table driven from JavaScript.
///
/// The page keeps the balance (for example in `localStorage`): pass the
/// saved value to the constructor and read [`WasmTable::balance`] back after
/// each intent.
#[wasm_bindgen]
pub struct WasmTable {
    game: Game,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, saved_balance: Option<f64>) -> Self {
        let store = match saved_balance {
            Some(balance) => MemoryStore::with_balance(balance as i64),
            None => MemoryStore::new(),
        };
        Self {
            game: Game::new(GameOptions::default(), u64::from(seed), store),
        }
    }

    pub fn tick(&mut self, now: f64) {
        self.game.tick(now as u64);
    }

    pub fn snapshot(&self, now: f64) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.game.snapshot(now as u64))
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn balance(&self) -> f64 {
        self.game.balance() as f64
    }

    pub fn is_animating(&self) -> bool {
        self.game.is_animating()
    }

    pub fn place_bet(&mut self, chip: u32, now: f64) -> Result<(), JsValue> {
        let chip = Chip::from_value(chip as usize)
            .ok_or_else(|| JsValue::from_str("unknown chip value"))?;
        self.apply(Intent::PlaceBet(chip), now)
    }

    pub fn clear_bet(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::ClearBet, now)
    }

    pub fn deal(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Deal, now)
    }

    pub fn insurance(&mut self, take: bool, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Insurance(take), now)
    }

    pub fn hit(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Hit, now)
    }

    pub fn stand(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Stand, now)
    }

    pub fn double_down(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Double, now)
    }

    pub fn split(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Split, now)
    }

    pub fn check_count(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::CheckCount, now)
    }

    pub fn count_key(&mut self, key: char, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::CountKey(key), now)
    }

    pub fn count_backspace(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::CountBackspace, now)
    }

    pub fn count_submit(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::CountSubmit, now)
    }

    pub fn continue_to_count_check(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Continue, now)
    }

    pub fn new_round(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::NewRound, now)
    }

    pub fn reshuffle(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Reshuffle, now)
    }

    pub fn pause(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Pause, now)
    }

    pub fn resume(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Resume, now)
    }

    pub fn quit(&mut self, now: f64) -> Result<(), JsValue> {
        self.apply(Intent::Quit, now)
    }
}

impl WasmTable {
    fn apply(&mut self, intent: Intent, now: f64) -> Result<(), JsValue> {
        self.game.apply(intent, now as u64).map_err(js_err)
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
