
use crate::Catalog;

/// A slice of the reference catalog. `cto` is deliberately isolated: nothing
/// scores an edge to or from it, so `show_all` must leave it hidden.
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_json_str(SAMPLE_CATALOG).unwrap()
}

pub(crate) const SAMPLE_CATALOG: &str = r#"{
  "dev-net": {
    "title": "Desenvolvedor .NET",
    "level": "Pleno",
    "pillar": "Tecnologia",
    "salaryMin": 8000,
    "salaryMax": 12000,
    "description": "Desenvolvimento de aplicações web e desktop com tecnologias Microsoft.",
    "requirements": ["3+ anos em .NET", "C#, ASP.NET Core", "SQL Server/PostgreSQL"],
    "connections": ["dev-frontend", "dev-backend", "dev-fullstack"],
    "transferableSkills": ["programacao", "logica", "bancodados", "analiseproblemas"]
  },
  "dev-frontend": {
    "title": "Desenvolvedor Frontend",
    "level": "Pleno",
    "pillar": "Tecnologia",
    "salaryMin": 7000,
    "salaryMax": 11000,
    "description": "Desenvolvimento de interfaces de usuário modernas e responsivas.",
    "requirements": ["React/Vue/Angular", "JavaScript/TypeScript", "CSS/SASS"],
    "connections": ["dev-fullstack"],
    "transferableSkills": ["programacao", "ux", "design", "logica"]
  },
  "dev-backend": {
    "title": "Desenvolvedor Backend",
    "level": "Pleno",
    "pillar": "Tecnologia",
    "salaryMin": 8500,
    "salaryMax": 13000,
    "description": "Desenvolvimento de sistemas backend, APIs e arquitetura de serviços.",
    "requirements": ["APIs REST", "Microserviços", "Docker/Kubernetes"],
    "connections": ["tech-lead"],
    "transferableSkills": ["programacao", "arquitetura", "bancodados", "seguranca"]
  },
  "dev-fullstack": {
    "title": "Desenvolvedor Fullstack",
    "level": "Sênior",
    "pillar": "Tecnologia",
    "salaryMin": 10000,
    "salaryMax": 16000,
    "description": "Desenvolvimento completo de aplicações web do frontend ao backend.",
    "requirements": ["Frontend + Backend", "DevOps básico"],
    "connections": ["tech-lead"],
    "transferableSkills": ["programacao", "arquitetura", "ux", "gestao"]
  },
  "tech-lead": {
    "title": "Tech Lead",
    "level": "Sênior",
    "pillar": "Tecnologia",
    "salaryMin": 14000,
    "salaryMax": 20000,
    "description": "Liderança de equipes técnicas e definição de padrões.",
    "requirements": ["Liderança técnica", "Mentoria"],
    "connections": [],
    "transferableSkills": ["lideranca", "mentoria", "arquitetura", "gestao"]
  },
  "analista-dados": {
    "title": "Analista de Dados",
    "level": "Pleno",
    "pillar": "Dados",
    "salaryMin": 8000,
    "salaryMax": 12000,
    "description": "Análise de dados, relatórios e insights para negócio.",
    "requirements": ["SQL", "Python/R", "Power BI/Tableau"],
    "connections": ["data-scientist"],
    "transferableSkills": ["analise", "dados", "estatistica", "programacao"]
  },
  "data-scientist": {
    "title": "Cientista de Dados",
    "level": "Sênior",
    "pillar": "Dados",
    "salaryMin": 12000,
    "salaryMax": 20000,
    "description": "Modelagem preditiva, machine learning e insights avançados.",
    "requirements": ["Machine Learning", "Python/R avançado", "Estatística"],
    "connections": [],
    "transferableSkills": ["programacao", "estatistica", "pesquisa", "analise"]
  },
  "product-manager": {
    "title": "Product Manager",
    "level": "Sênior",
    "pillar": "Produto",
    "salaryMin": 12000,
    "salaryMax": 18000,
    "description": "Gestão estratégica de produtos digitais e roadmap.",
    "requirements": ["Estratégia de produto", "Metodologias ágeis"],
    "connections": [],
    "transferableSkills": ["estrategia", "gestao", "analise", "comunicacao"]
  },
  "analista-financeiro": {
    "title": "Analista Financeiro",
    "level": "Pleno",
    "pillar": "Financeiro",
    "salaryMin": 7000,
    "salaryMax": 11000,
    "description": "Análise financeira, orçamentos e indicadores econômicos.",
    "requirements": ["Excel Avançado", "Contabilidade", "PowerBI"],
    "connections": ["controller"],
    "transferableSkills": ["analise", "dados", "excel", "logica"]
  },
  "controller": {
    "title": "Controller",
    "level": "Sênior",
    "pillar": "Financeiro",
    "salaryMin": 12000,
    "salaryMax": 18000,
    "description": "Controladoria corporativa e gestão de processos financeiros.",
    "requirements": ["Controladoria", "IFRS", "Gestão de equipes"],
    "connections": [],
    "transferableSkills": ["gestao", "analise", "compliance", "lideranca"]
  },
  "cto": {
    "title": "Chief Technology Officer",
    "level": "C-Level",
    "pillar": "Liderança",
    "salaryMin": 25000,
    "salaryMax": 45000,
    "description": "Liderança executiva em tecnologia e estratégia de inovação.",
    "requirements": ["Visão estratégica", "Liderança executiva"],
    "connections": [],
    "transferableSkills": []
  }
}"#;
