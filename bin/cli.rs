//! CLI tool for deploying and interacting with the distribution contracts.

use distributor_contracts::distribution::Distributor;
use distributor_contracts::oracle::{PriceConsumer, StaticPriceFeed};
use distributor_contracts::token::Token;
use odra::prelude::{Address, Addressable};
use odra::host::{HostEnv, NoArgs};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the Distributor contract.
pub struct DistributorDeployScript;

impl DeployScript for DistributorDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let _distributor = Distributor::load_or_deploy(
            &env,
            NoArgs,
            container,
            400_000_000_000 // Gas limit for distributor deployment
        )?;

        Ok(())
    }
}

/// Deploys the settlement token.
pub struct TokenDeployScript;

impl DeployScript for TokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use distributor_contracts::token::TokenInitArgs;

        let _token = Token::load_or_deploy(
            &env,
            TokenInitArgs {
                name: String::from("Settlement Token"),
                symbol: String::from("STL"),
                decimals: 18,
            },
            container,
            300_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the price oracle pair (reference feed + consumer).
pub struct OracleDeployScript;

impl DeployScript for OracleDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use distributor_contracts::oracle::feed::StaticPriceFeedInitArgs;
        use distributor_contracts::oracle::price_consumer::PriceConsumerInitArgs;

        let feed = StaticPriceFeed::load_or_deploy(
            &env,
            StaticPriceFeedInitArgs { decimals: 8 },
            container,
            300_000_000_000
        )?;

        let _consumer = PriceConsumer::load_or_deploy(
            &env,
            PriceConsumerInitArgs {
                feed: feed.address().clone(),
            },
            container,
            300_000_000_000
        )?;

        Ok(())
    }
}

/// Scenario to configure the distributor's token reference.
pub struct SetTokenScenario;

impl Scenario for SetTokenScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "token",
                "Address of the CEP-18 token to configure",
                NamedCLType::Key,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<Distributor>(env)?;
        let token = args.get_single::<Address>("token")?;

        env.set_gas(50_000_000_000);
        distributor.try_set_token(Some(token))?;

        println!("Token reference updated!");
        Ok(())
    }
}

impl ScenarioMetadata for SetTokenScenario {
    const NAME: &'static str = "set-token";
    const DESCRIPTION: &'static str = "Configures the token eligible for the restricted withdrawal path";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for Casper distribution contracts")
        // Deploy scripts
        .deploy(DistributorDeployScript)
        .deploy(TokenDeployScript)
        .deploy(OracleDeployScript)
        // Contract references
        .contract::<Distributor>()
        .contract::<Token>()
        .contract::<StaticPriceFeed>()
        .contract::<PriceConsumer>()
        // Scenarios
        .scenario(SetTokenScenario)
        .build()
        .run();
}
