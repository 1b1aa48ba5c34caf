//! Built-in sample catalog used by the server and the CLI demo until a real
//! listings feed is wired in.

use chrono::{DateTime, Duration, Utc};
use palanca::listings::{
    Agent, AgentId, AgentRepository, ListingRepository, Property, PropertyId, PropertyKind,
    PropertyStatus, RepositoryError,
};

pub(crate) fn apply<L, A>(listings: &L, agents: &A) -> Result<(), RepositoryError>
where
    L: ListingRepository,
    A: AgentRepository,
{
    for agent in sample_agents() {
        agents.insert(agent)?;
    }
    for property in sample_properties() {
        listings.insert(property)?;
    }
    Ok(())
}

fn agent(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    specialty: &str,
    experience_years: u8,
    sales_count: u32,
    bio: &str,
) -> Agent {
    Agent {
        id: AgentId(id.to_string()),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        specialty: specialty.to_string(),
        experience_years,
        sales_count,
        photo: None,
        bio: Some(bio.to_string()),
        social: Vec::new(),
        created_at: Utc::now(),
    }
}

pub(crate) fn sample_agents() -> Vec<Agent> {
    vec![
        agent(
            "agent-1",
            "Joao Silva",
            "joao.silva@palancareal.ao",
            "+244 923 456 789",
            "Especialista em Luanda",
            5,
            80,
            "Especialista em imoveis residenciais e comerciais na regiao de Luanda.",
        ),
        agent(
            "agent-2",
            "Maria Santos",
            "maria.santos@palancareal.ao",
            "+244 923 456 790",
            "Especialista em Benguela",
            7,
            120,
            "Foco em propriedades residenciais de alto padrao em Benguela.",
        ),
        agent(
            "agent-3",
            "Carlos Mendes",
            "carlos.mendes@palancareal.ao",
            "+244 923 456 791",
            "Especialista Comercial",
            8,
            95,
            "Especializado em imoveis comerciais e investimentos.",
        ),
        agent(
            "agent-4",
            "Ana Ferreira",
            "ana.ferreira@palancareal.ao",
            "+244 923 456 792",
            "Especialista em Huambo",
            6,
            75,
            "Conhecimento profundo do mercado imobiliario em Huambo.",
        ),
    ]
}

struct SeedListing {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: u64,
    kind: PropertyKind,
    bedrooms: Option<u8>,
    bathrooms: Option<u8>,
    area: u32,
    neighborhood: &'static str,
    city: &'static str,
    province: &'static str,
    address: &'static str,
    features: &'static [&'static str],
    agent_id: &'static str,
    featured: bool,
}

impl SeedListing {
    fn into_property(self, created_at: DateTime<Utc>) -> Property {
        Property {
            id: PropertyId(self.id.to_string()),
            title: self.title.to_string(),
            description: self.description.to_string(),
            price: self.price,
            currency: "AOA".to_string(),
            kind: self.kind,
            status: PropertyStatus::Available,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            neighborhood: self.neighborhood.to_string(),
            city: self.city.to_string(),
            province: self.province.to_string(),
            address: self.address.to_string(),
            features: self.features.iter().map(|s| s.to_string()).collect(),
            images: Vec::new(),
            agent_id: AgentId(self.agent_id.to_string()),
            featured: self.featured,
            created_at,
            updated_at: created_at,
        }
    }
}

pub(crate) fn sample_properties() -> Vec<Property> {
    let listings = [
        SeedListing {
            id: "prop-1",
            title: "Apartamento de Luxo na Ilha de Luanda",
            description: "Magnifico apartamento com vista para o mar, acabamentos de primeira \
                          qualidade e localizacao privilegiada na Ilha de Luanda.",
            price: 85_000_000,
            kind: PropertyKind::Apartment,
            bedrooms: Some(3),
            bathrooms: Some(2),
            area: 120,
            neighborhood: "Ilha de Luanda",
            city: "Luanda",
            province: "Luanda",
            address: "Rua da Ilha, Edificio Atlantico, Apartamento 15A",
            features: &[
                "Vista para o mar",
                "Ar condicionado",
                "Garagem",
                "Seguranca 24h",
                "Piscina",
            ],
            agent_id: "agent-1",
            featured: true,
        },
        SeedListing {
            id: "prop-2",
            title: "Casa Moderna com Jardim",
            description: "Linda casa moderna com amplo jardim, ideal para familias que procuram \
                          conforto e tranquilidade.",
            price: 120_000_000,
            kind: PropertyKind::House,
            bedrooms: Some(4),
            bathrooms: Some(3),
            area: 200,
            neighborhood: "Centro",
            city: "Benguela",
            province: "Benguela",
            address: "Rua do Centro, Casa 45",
            features: &[
                "Jardim",
                "Garagem dupla",
                "Cozinha moderna",
                "Churrasqueira",
                "Sistema solar",
            ],
            agent_id: "agent-2",
            featured: true,
        },
        SeedListing {
            id: "prop-3",
            title: "Edificio Comercial Prime",
            description: "Excelente oportunidade de investimento em edificio comercial \
                          localizado em zona nobre de Huambo.",
            price: 450_000_000,
            kind: PropertyKind::Commercial,
            bedrooms: None,
            bathrooms: Some(8),
            area: 1200,
            neighborhood: "Centro Comercial",
            city: "Huambo",
            province: "Huambo",
            address: "Avenida Principal, Edificio Comercial Prime",
            features: &[
                "5 Andares",
                "20 Vagas de estacionamento",
                "Elevador",
                "Gerador",
                "Sistema de seguranca",
            ],
            agent_id: "agent-3",
            featured: true,
        },
        SeedListing {
            id: "prop-4",
            title: "Apartamento T2 no Maianga",
            description: "Apartamento bem localizado no Maianga, proximo a escolas e centros \
                          comerciais.",
            price: 45_000_000,
            kind: PropertyKind::Apartment,
            bedrooms: Some(2),
            bathrooms: Some(1),
            area: 80,
            neighborhood: "Maianga",
            city: "Luanda",
            province: "Luanda",
            address: "Rua do Maianga, Edificio Sao Joao, Apto 8B",
            features: &["Ar condicionado", "Cozinha equipada", "Varanda", "Portaria"],
            agent_id: "agent-1",
            featured: false,
        },
        SeedListing {
            id: "prop-5",
            title: "Casa T3 no Lobito",
            description: "Casa espacosa com quintal amplo, ideal para quem procura sossego perto \
                          do mar.",
            price: 65_000_000,
            kind: PropertyKind::House,
            bedrooms: Some(3),
            bathrooms: Some(2),
            area: 150,
            neighborhood: "Restinga",
            city: "Lobito",
            province: "Benguela",
            address: "Rua da Restinga, Casa 23",
            features: &["Quintal", "Garagem", "Proximo a praia", "Cozinha moderna"],
            agent_id: "agent-2",
            featured: false,
        },
        SeedListing {
            id: "prop-6",
            title: "Loja Comercial no Centro",
            description: "Excelente loja comercial em zona de grande movimento, perfeita para \
                          negocios.",
            price: 35_000_000,
            kind: PropertyKind::Commercial,
            bedrooms: None,
            bathrooms: Some(1),
            area: 60,
            neighborhood: "Centro",
            city: "Malanje",
            province: "Malanje",
            address: "Rua Comercial, Loja 15",
            features: &["Montra ampla", "Armazem", "WC", "Zona movimentada"],
            agent_id: "agent-4",
            featured: false,
        },
    ];

    // Stagger timestamps so catalog order (newest first) matches the listing
    // order above.
    let now = Utc::now();
    listings
        .into_iter()
        .enumerate()
        .map(|(index, listing)| listing.into_property(now - Duration::days(index as i64)))
        .collect()
}
