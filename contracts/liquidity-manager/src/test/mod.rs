
use crate::{LiquidityManager, LiquidityManagerClient};
use lm_types::SharePolicy;
use mocks::pool::{MockPool, MockPoolClient};
use mocks::position_manager::{MockPositionManager, MockPositionManagerClient};
use mocks::router::{MockRouter, MockRouterClient};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Symbol, TryFromVal, Val, Vec};

/// One whole token at 7 decimals
pub const UNIT: i128 = 10_000_000;

pub const POOL_FEE: u32 = 3000;
pub const TICK_SPACING: i32 = 60;

/// Engine wired to a mock router, position manager and pool over two
/// Stellar asset contracts. The user starts with 100 UNIT of native; the
/// router holds reserves of both assets.
pub struct Fixture {
    pub env: Env,
    pub engine: LiquidityManagerClient<'static>,
    pub router: MockRouterClient<'static>,
    pub manager: MockPositionManagerClient<'static>,
    pub pool: Address,
    pub admin: Address,
    pub fee_receiver: Address,
    pub user: Address,
    pub native: Address,
    pub counter: Address,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_policy(SharePolicy::default_policy())
    }

    pub fn with_policy(policy: SharePolicy) -> Self {
        Self::setup(policy, true)
    }

    /// Default policy with the native asset as the pool's token1
    pub fn native_as_token1() -> Self {
        Self::setup(SharePolicy::default_policy(), false)
    }

    fn setup(policy: SharePolicy, native_is_token0: bool) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let token_admin = Address::generate(&env);
        let first = env
            .register_stellar_asset_contract_v2(token_admin.clone())
            .address();
        let second = env.register_stellar_asset_contract_v2(token_admin).address();
        let (token0, token1) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        let (native, counter) = if native_is_token0 {
            (token0.clone(), token1.clone())
        } else {
            (token1.clone(), token0.clone())
        };

        let pool = env.register(MockPool, ());
        MockPoolClient::new(&env, &pool).initialize(&token0, &token1, &POOL_FEE, &TICK_SPACING);

        let router = MockRouterClient::new(&env, &env.register(MockRouter, ()));
        let manager = MockPositionManagerClient::new(&env, &env.register(MockPositionManager, ()));
        let engine = LiquidityManagerClient::new(&env, &env.register(LiquidityManager, ()));

        let admin = Address::generate(&env);
        let fee_receiver = Address::generate(&env);
        let user = Address::generate(&env);

        let fixture = Self {
            env,
            engine,
            router,
            manager,
            pool,
            admin,
            fee_receiver,
            user,
            native,
            counter,
        };
        fixture.mint_native(&fixture.router.address, 1_000 * UNIT);
        fixture.mint_counter(&fixture.router.address, 1_000 * UNIT);
        fixture.mint_native(&fixture.user, 100 * UNIT);

        fixture.engine.initialize(
            &fixture.admin,
            &fixture.router.address,
            &fixture.manager.address,
            &fixture.pool,
            &fixture.native,
            &fixture.fee_receiver,
            &policy,
        );
        fixture
    }

    pub fn native_is_token0(&self) -> bool {
        self.native < self.counter
    }

    /// Arrange (native, counter) into (token0, token1)
    pub fn pool_order(&self, native: i128, counter: i128) -> (i128, i128) {
        if self.native_is_token0() {
            (native, counter)
        } else {
            (counter, native)
        }
    }

    pub fn native_balance(&self, id: &Address) -> i128 {
        TokenClient::new(&self.env, &self.native).balance(id)
    }

    pub fn counter_balance(&self, id: &Address) -> i128 {
        TokenClient::new(&self.env, &self.counter).balance(id)
    }

    pub fn mint_native(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.native).mint(to, &amount);
    }

    pub fn mint_counter(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.counter).mint(to, &amount);
    }

    /// Back `fees` in each asset with manager-held tokens and credit them to
    /// `position_id`
    pub fn accrue_fees(&self, position_id: u32, fees_native: i128, fees_counter: i128) {
        self.mint_native(&self.manager.address, fees_native);
        self.mint_counter(&self.manager.address, fees_counter);
        let (fees0, fees1) = self.pool_order(fees_native, fees_counter);
        self.manager.accrue_fees(&position_id, &fees0, &fees1);
    }

    /// Topics and decoded data of the latest event the engine published
    /// under `name`
    pub fn last_event<T>(&self, name: &str) -> Option<(Vec<Val>, T)>
    where
        T: TryFromVal<Env, Val>,
    {
        let name = Symbol::new(&self.env, name);
        let mut latest = None;
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract != self.engine.address {
                continue;
            }
            let topic = topics
                .get(0)
                .and_then(|topic| Symbol::try_from_val(&self.env, &topic).ok());
            if topic == Some(name.clone()) {
                latest = Some((topics, data));
            }
        }
        let (topics, data) = latest?;
        let data = T::try_from_val(&self.env, &data).ok()?;
        Some((topics, data))
    }

    /// Address carried at `index` in an event's topics
    pub fn topic_address(&self, topics: &Vec<Val>, index: u32) -> Option<Address> {
        let topic = topics.get(index)?;
        Address::try_from_val(&self.env, &topic).ok()
    }

    /// Deposit 10 UNIT from the user with no slippage floor
    pub fn open_position(&self) -> u32 {
        self.engine.deposit(&self.user, &(10 * UNIT), &0)
    }
}
